//! Batch execution engine
//!
//! This module turns an ordered list of append and delete actions into Notion
//! calls and reports the outcome of every remote write.

mod append;
mod delete;
mod executor;
mod types;


pub use append::AppendOperation;
pub use delete::{
    ALREADY_ARCHIVED_NOTE, DeleteDisposition, DeleteOperation, INVALID_ID_ERROR, NOT_FOUND_NOTE,
    archive_idempotent,
};
pub use executor::{BatchExecutor, ExecutorConfig, UNSUPPORTED_ACTION_ERROR};
pub use types::{
    Action, BatchRequest, ErrorEntry, ExecutionReport, OpKind, Outcome, ResultEntry,
};
