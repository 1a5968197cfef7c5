//! Error handling for the relay
//!
//! This module defines all error types used throughout the relay.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{RelayError, Result};
