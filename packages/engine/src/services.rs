//! Pluggable collaborators used by the engine.
//!
//! Rendering a component is a pipeline: flatten its field tree, convert
//! the leaves to template data, then feed the data to a template engine.
//! Each stage is a trait so hosts can bring their own renderer (the HTML
//! and behavior engines differ per deployment) while the engine owns the
//! orchestration. [`Services`] bundles one implementation of each.

use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;
use uuid::Uuid;

use sitekit_dom::Field;

use crate::errors::EngineResult;

/// Key/value payload handed to template engines.
pub type TemplateData = serde_json::Map<String, Value>;

/// How much of a field's subtree a conversion should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataScope {
    /// Convert every field, including nested children.
    All,
}

/// Flattens a nested field tree into a flat list of leaves.
pub trait FieldFlattener: Send + Sync {
    fn flatten(&self, fields: &[Field]) -> Vec<Field>;
}

/// Converts flattened fields into template data.
///
/// Conversion is async because hosts may fetch relational field values
/// from external storage.
///
/// A field without a usable value must convert to an empty entry, not
/// an error. Converter errors abort the whole traversal and are
/// reserved for genuine failures (storage faults, broken payloads).
pub trait DataConverter: Send + Sync {
    fn convert<'a>(
        &'a self,
        fields: &'a [Field],
        scope: DataScope,
    ) -> BoxFuture<'a, EngineResult<TemplateData>>;
}

/// Renders a template source against a data payload.
pub trait TemplateEngine: Send + Sync {
    fn render<'a>(
        &'a self,
        source: &'a str,
        data: &'a TemplateData,
    ) -> BoxFuture<'a, EngineResult<String>>;
}

/// Produces fresh node ids for sections, columns and rows.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default [`IdGenerator`] backed by UUID v4.
///
/// Ids are prefixed with a letter so they stay valid CSS identifiers
/// when substituted into stylesheet selectors.
#[derive(Debug, Default, Clone)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        format!("u{}", Uuid::new_v4().simple())
    }
}

/// One implementation of each collaborator, shared by the engine.
#[derive(Clone)]
pub struct Services {
    /// Flattens nested field trees before conversion.
    pub flattener: Arc<dyn FieldFlattener>,
    /// Converts flattened fields to template data.
    pub converter: Arc<dyn DataConverter>,
    /// Renders raw component HTML templates.
    pub html: Arc<dyn TemplateEngine>,
    /// Re-renders final HTML during hydration.
    pub handlebars: Arc<dyn TemplateEngine>,
    /// Mints ids for freshly created nodes.
    pub ids: Arc<dyn IdGenerator>,
}

impl Services {
    pub fn new(
        flattener: Arc<dyn FieldFlattener>,
        converter: Arc<dyn DataConverter>,
        html: Arc<dyn TemplateEngine>,
        handlebars: Arc<dyn TemplateEngine>,
    ) -> Self {
        Self {
            flattener,
            converter,
            html,
            handlebars,
            ids: Arc::new(UuidIds),
        }
    }

    /// Replaces the default UUID id generator.
    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }
}
