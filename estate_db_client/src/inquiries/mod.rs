pub mod insert;
