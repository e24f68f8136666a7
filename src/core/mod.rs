//! Core types and constants for the position fusion engine

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
