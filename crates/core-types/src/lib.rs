//! # AlphaLab Core Types
//!
//! The shared data shapes of the workspace. This is a Layer 0 crate: it depends
//! on nothing else in the workspace, and every other crate speaks in its types.

pub mod enums;
pub mod error;
pub mod universe;

// Re-export the core types to provide a clean public API.
pub use enums::CoveragePolicy;
pub use error::CoreError;
pub use universe::{SignalMap, Universe};
