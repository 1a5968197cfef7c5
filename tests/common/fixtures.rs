//! Shared fixtures

use notion_relay::Config;
use serde_json::{Value, json};

/// Page every test relay is bound to
pub const PAGE_ID: &str = "2ea6b44222f2803cb41af259bea472c2";

/// Hyphenated form of a block id nobody ever created
pub const MISSING_ID: &str = "11111111-2222-3333-4444-555555555555";

/// A valid configuration pointed at `api_base`
pub fn relay_config(api_base: &str) -> Config {
    let mut config = Config::default();
    config.notion.token = "secret_integration".to_string();
    config.notion.page_id = PAGE_ID.to_string();
    config.notion.api_base = api_base.to_string();
    config
}

/// Build a `{actions: [...]}` request body
pub fn batch(actions: Vec<Value>) -> Value {
    json!({ "actions": actions })
}

pub fn append_text(text: &str) -> Value {
    json!({ "op": "append", "block": { "text": text } })
}

pub fn delete(id: &str) -> Value {
    json!({ "op": "delete", "id": id })
}
