//! Domain building blocks for term-keeper.
//!
//! This crate does no I/O. It holds the identifier types, the error
//! taxonomy, the sortable id generator, the term filter/sort value types,
//! and field validation shared by the repository and HTTP layers.

pub mod error;
pub mod filters;
pub mod id;
pub mod types;
pub mod validation;
