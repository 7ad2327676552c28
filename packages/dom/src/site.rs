//! Site document tree.
//!
//! `Site → Page → Section → Column → Row`, plus the symbol library. The
//! shapes mirror the stored JSON document: row variants are tagged by
//! `"type"` and the derived facet of a component serializes under `"final"`
//! (a reserved word in Rust, so the struct field is named `rendered`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::Field;

/// Full site document, the unit the timeline snapshots.
///
/// `dependencies`, `styles` and `wrapper` are opaque configuration blobs:
/// the engine replaces them whole and never looks inside.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Site {
    pub pages: Vec<Page>,
    #[serde(default)]
    pub dependencies: Value,
    #[serde(default)]
    pub styles: Value,
    #[serde(default)]
    pub wrapper: Value,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

/// A page: ordered sections plus optional nested child pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub content: Vec<Section>,
    /// Nested pages. Absent from the wire when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
}

impl Page {
    /// Create an empty page.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Attach content sections.
    pub fn with_content(mut self, content: Vec<Section>) -> Self {
        self.content = content;
        self
    }

    /// Find a top-level page by id (nested pages are not searched).
    pub fn find_by_id<'a>(pages: &'a [Page], id: &str) -> Option<&'a Page> {
        pages.iter().find(|page| page.id == id)
    }
}

/// Horizontal extent of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionWidth {
    Fullwidth,
    #[default]
    Contained,
}

/// A section: one horizontal band of columns on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub width: SectionWidth,
    pub columns: Vec<Column>,
}

/// A column inside a section. `size` is the layout hint the renderer
/// interprets (the engine treats it as opaque).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    #[serde(default)]
    pub size: String,
    pub rows: Vec<Row>,
}

/// A row, the leaf slot of the layout tree.
///
/// `Content` rows carry literal HTML. `Component` rows are instances of a
/// [`Symbol`]: they reference the symbol by id (never own it) and carry
/// their own raw/final value facets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Row {
    Content {
        id: String,
        value: ContentValue,
    },
    Component {
        id: String,
        #[serde(rename = "symbolID")]
        symbol_id: String,
        value: ComponentValue,
    },
}

impl Row {
    /// Create a content row with literal HTML.
    pub fn content(id: impl Into<String>, html: impl Into<String>) -> Self {
        Row::Content {
            id: id.into(),
            value: ContentValue { html: html.into() },
        }
    }

    /// Create a component row bound to a symbol.
    pub fn component(
        id: impl Into<String>,
        symbol_id: impl Into<String>,
        value: ComponentValue,
    ) -> Self {
        Row::Component {
            id: id.into(),
            symbol_id: symbol_id.into(),
            value,
        }
    }

    /// Row id, independent of the variant.
    pub fn id(&self) -> &str {
        match self {
            Row::Content { id, .. } => id,
            Row::Component { id, .. } => id,
        }
    }
}

/// Literal value carried by a `content` row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentValue {
    #[serde(default)]
    pub html: String,
}

/// The two facets of a component's value: authored source and derived
/// output. The derived facet is never hand-edited; it is always
/// recomputable from `raw` plus current field data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentValue {
    pub raw: RawContent,
    #[serde(rename = "final")]
    pub rendered: RenderedContent,
}

/// Author-editable source of a component: templated HTML, scoped CSS,
/// behavior code, and the field definitions the templates consume.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawContent {
    pub html: String,
    pub css: String,
    pub js: String,
    pub fields: Vec<Field>,
}

/// Derived output of a component (wire name `"final"`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderedContent {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// A reusable component definition, owned by the symbol library and
/// referenced by any number of component rows via `symbolID`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: String,
    pub value: ComponentValue,
}

impl Symbol {
    /// Create a symbol with empty facets.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: ComponentValue::default(),
        }
    }

    /// Attach a value.
    pub fn with_value(mut self, value: ComponentValue) -> Self {
        self.value = value;
        self
    }
}
