//! OpenFish Common Utilities
//!
//! Shared infrastructure for all OpenFish crates:
//! - Error types and result aliases
//! - Playback tick scheduling
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
