pub mod category;
pub mod term;
pub mod user;
