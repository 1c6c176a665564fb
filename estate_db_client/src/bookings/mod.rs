pub mod get;
pub mod insert;
