//! Error handling utilities
//!
//! This module defines the relay error type and its HTTP representation.

pub mod error;

pub use error::*;
