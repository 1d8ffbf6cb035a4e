//! Helpers that sit outside the validation core.

mod hex;

pub use hex::from_hex;
