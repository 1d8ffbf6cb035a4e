
pub use builder::*;
