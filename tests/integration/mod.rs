//! Integration tests for notion-relay
//!
//! These tests drive the public API against an in-memory store or a mocked
//! Notion API.

pub mod config_tests;
pub mod notion_client_tests;
pub mod routes_tests;
