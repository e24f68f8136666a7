//! Fusion orchestration and confidence scoring

pub mod confidence;
pub mod engine;

pub use confidence::score_confidence;
pub use engine::{fuse, FusionEngine};
