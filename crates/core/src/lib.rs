//! Core traits and types for the Hinglish transliteration service
//!
//! This crate provides the foundation shared by the other crates:
//! - The `Transliterator` trait implemented by every backend
//! - The `Suggestions` list built for each request
//! - Script detection for Roman and Devanagari text
//! - Error types

pub mod error;
pub mod script;
pub mod suggestions;
pub mod traits;

pub use error::{Error, Result};
pub use script::{Script, ScriptDetector};
pub use suggestions::Suggestions;
pub use traits::{BackendHealth, Transliterator};
