//! Field definitions.
//!
//! Fields are the editable data model behind a component: each one maps a
//! template variable (`key`) to a value. Fields form a tree (repeater and
//! group fields carry child definitions in `fields`) and are flattened to
//! leaf entries before being converted to template data. Field identity
//! across symbol/instance merges is the `id`, never the key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field definition, possibly with nested children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,

    /// Template variable name this field feeds (e.g. `title` for `{{title}}`).
    pub key: String,

    /// Human-readable label shown in the editing UI.
    #[serde(default)]
    pub label: String,

    /// Editor control type (`text`, `image`, `repeater`, ...). Opaque to the
    /// engine; the data converter interprets it.
    #[serde(rename = "type", default)]
    pub field_type: String,

    /// Current value. `Null` means the field has no usable value yet.
    #[serde(default)]
    pub value: Value,

    /// Child definitions for repeating/grouped fields.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Field {
    /// Create a leaf field with a value.
    pub fn new(id: impl Into<String>, key: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            label: String::new(),
            field_type: "text".to_string(),
            value,
            fields: Vec::new(),
        }
    }

    /// Attach a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the editor control type.
    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    /// Attach child definitions, turning this into a group/repeater field.
    pub fn with_children(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}
