//! Common test utilities for notion-relay
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures, MemoryStore};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let store = MemoryStore::new();
//!     let id = store.insert("existing text");
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{PAGE_ID, relay_config};
pub use store::{Call, MemoryStore};
