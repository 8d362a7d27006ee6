//! batch265 - Batch H.265 transcoder
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod conversion;
pub mod error;
pub mod probe;
pub mod scanner;
pub mod tools;

pub use error::{Error, Result};
