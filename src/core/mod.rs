//! Core functionality for the relay
//!
//! Block primitives, the Notion transport seam, and the batch engine.

pub mod batch;
pub mod blocks;
pub mod notion;
