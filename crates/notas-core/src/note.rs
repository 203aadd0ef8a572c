//! Note documents as returned by the per-user document store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names that may carry the note text, in priority order.
///
/// The first field holding a non-empty string wins; an empty string falls
/// through to the next candidate. Clients have historically written the
/// payload under any of these names, so all three stay accepted.
pub const TEXT_FIELD_PRIORITY: [&str; 3] = ["content", "text", "body"];

/// A note document owned by exactly one user.
///
/// The store assigns the opaque `id`; everything else is a free-form field
/// map written by the client application. This system only ever reads notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDocument {
    /// Provider-assigned document key.
    pub id: String,
    /// Document fields as stored, untyped.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl NoteDocument {
    /// Create a note document from an id and its field map.
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Resolve the note text by field priority (`content`, `text`, `body`).
    ///
    /// Returns the first non-empty string value among the accepted field
    /// names, or `None` when no field carries text. A note with no resolved
    /// text is invalid for summarization.
    pub fn text(&self) -> Option<&str> {
        TEXT_FIELD_PRIORITY
            .iter()
            .filter_map(|name| self.fields.get(*name))
            .filter_map(Value::as_str)
            .find(|s| !s.is_empty())
    }

    /// Flatten to the listing shape `{"id": ..., ...fields}`.
    ///
    /// A stored field literally named `id` would collide with the document
    /// key; the key wins, matching how the store itself labels documents.
    pub fn to_listing_value(&self) -> Value {
        let mut object = self.fields.clone();
        object.insert("id".to_string(), Value::String(self.id.clone()));
        Value::Object(object)
    }
}
