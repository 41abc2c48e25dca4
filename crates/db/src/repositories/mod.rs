//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut PgConnection` as the first argument.

pub mod category_repo;
pub mod term_category_repo;
pub mod term_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use term_category_repo::TermCategoryRepo;
pub use term_repo::TermRepo;
pub use user_repo::UserRepo;
