//! Data models

pub mod weather;
pub mod prediction;

pub use weather::*;
pub use prediction::*;
