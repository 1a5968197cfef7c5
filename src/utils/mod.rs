//! Utility modules for the relay
//!
//! - **error**: error type, constructors and HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{RelayError, Result};
pub use logging::init_tracing;
