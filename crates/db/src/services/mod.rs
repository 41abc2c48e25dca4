//! Services composing several repositories into one logical operation.

pub mod term_service;

pub use term_service::TermService;
