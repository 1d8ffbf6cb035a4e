pub mod common;
pub mod sections;
pub mod validate;
