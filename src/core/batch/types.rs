//! Batch request and report types

use crate::core::blocks::ContentBlock;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Incoming `/execute` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Raw actions, interpreted one by one so a malformed entry cannot
    /// reject the whole batch
    #[serde(default)]
    pub actions: Vec<Value>,
}

impl BatchRequest {
    /// Interpret every raw action, preserving order
    pub fn parse_actions(&self) -> Vec<Action> {
        self.actions.iter().map(Action::from_value).collect()
    }
}

/// Operation name reported in result and error entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpKind {
    Delete,
    Append,
    /// An op string the executor does not understand
    Other(String),
}

impl OpKind {
    pub fn as_str(&self) -> &str {
        match self {
            OpKind::Delete => "delete",
            OpKind::Append => "append",
            OpKind::Other(op) => op,
        }
    }
}

impl Serialize for OpKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One step of a batch
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Archive the block with this raw (unvalidated) id
    Delete { id: String },
    /// Append content to the page
    Append { block: ContentBlock },
    /// Anything else: unknown op, or a known op missing its argument
    Unsupported { op: Option<String> },
}

impl Action {
    /// Interpret a raw action object.
    ///
    /// A delete needs a truthy `id`; non-string ids are kept in their JSON
    /// form and fail validation later. An append needs a `block` that is
    /// neither null nor an empty string.
    pub fn from_value(value: &Value) -> Self {
        let op = value.get("op").and_then(Value::as_str);
        match op {
            Some("delete") => match value.get("id") {
                Some(Value::String(id)) if !id.is_empty() => Action::Delete { id: id.clone() },
                Some(id) if is_truthy(id) => Action::Delete { id: id.to_string() },
                _ => Action::unsupported(op),
            },
            Some("append") => match value.get("block") {
                Some(block) if !block.is_null() && block.as_str() != Some("") => Action::Append {
                    block: ContentBlock::from_value(block.clone()),
                },
                _ => Action::unsupported(op),
            },
            _ => Action::unsupported(op),
        }
    }

    fn unsupported(op: Option<&str>) -> Self {
        Action::Unsupported {
            op: op.map(str::to_string),
        }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Action::Delete { .. } => OpKind::Delete,
            Action::Append { .. } => OpKind::Append,
            Action::Unsupported { op } => OpKind::Other(op.clone().unwrap_or_default()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// A successful remote effect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub op: OpKind,
    /// Always present; null when Notion returned no block id
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ResultEntry {
    pub fn new(op: OpKind) -> Self {
        Self {
            op,
            id: None,
            text: None,
            status: None,
            note: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A failed operation, or one chunk of it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEntry {
    pub op: OpKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Raw body of a rejected remote call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl ErrorEntry {
    pub fn new(op: OpKind) -> Self {
        Self {
            op,
            id: None,
            text: None,
            error: None,
            status: None,
            response: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }
}

/// Outcome of a single remote effect
pub type Outcome = Result<ResultEntry, ErrorEntry>;

/// Aggregated batch result, always returned with HTTP 200
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecutionReport {
    pub executed: Vec<ResultEntry>,
    pub errors: Vec<ErrorEntry>,
}

impl ExecutionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// File an outcome under `executed` or `errors`
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Ok(entry) => self.executed.push(entry),
            Err(entry) => self.errors.push(entry),
        }
    }

    /// True when no entry failed
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.executed.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Extend<Outcome> for ExecutionReport {
    fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}
