//! In-memory collaborators for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;

use sitekit_dom::Field;

use crate::errors::EngineResult;
use crate::services::{
    DataConverter, DataScope, FieldFlattener, IdGenerator, Services, TemplateData, TemplateEngine,
};

/// Depth-first flattener: parents precede their children.
pub(crate) struct DfsFlattener;

impl DfsFlattener {
    fn collect(fields: &[Field], out: &mut Vec<Field>) {
        for field in fields {
            let mut leaf = field.clone();
            leaf.fields = Vec::new();
            out.push(leaf);
            Self::collect(&field.fields, out);
        }
    }
}

impl FieldFlattener for DfsFlattener {
    fn flatten(&self, fields: &[Field]) -> Vec<Field> {
        let mut out = Vec::new();
        Self::collect(fields, &mut out);
        out
    }
}

/// Maps each field's key to its value; null values become empty strings.
pub(crate) struct KeyValueConverter;

impl DataConverter for KeyValueConverter {
    fn convert<'a>(
        &'a self,
        fields: &'a [Field],
        _scope: DataScope,
    ) -> BoxFuture<'a, EngineResult<TemplateData>> {
        async move {
            let mut data = TemplateData::new();
            for field in fields {
                let value = match &field.value {
                    Value::Null => Value::String(String::new()),
                    other => other.clone(),
                };
                data.insert(field.key.clone(), value);
            }
            Ok(data)
        }
        .boxed()
    }
}

/// Substitutes `{{key}}` tokens with the corresponding data entry.
pub(crate) struct TokenTemplates;

impl TemplateEngine for TokenTemplates {
    fn render<'a>(
        &'a self,
        source: &'a str,
        data: &'a TemplateData,
    ) -> BoxFuture<'a, EngineResult<String>> {
        async move {
            let mut out = source.to_string();
            for (key, value) in data {
                let token = format!("{{{{{}}}}}", key);
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                out = out.replace(&token, &text);
            }
            Ok(out)
        }
        .boxed()
    }
}

/// Counter-backed ids: `uid1`, `uid2`, ...
pub(crate) struct SequentialIds {
    next: AtomicUsize,
}

impl SequentialIds {
    pub(crate) fn new() -> Self {
        Self {
            next: AtomicUsize::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        format!("uid{}", self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Services wired to the in-memory collaborators above.
pub(crate) fn test_services() -> Services {
    Services::new(
        Arc::new(DfsFlattener),
        Arc::new(KeyValueConverter),
        Arc::new(TokenTemplates),
        Arc::new(TokenTemplates),
    )
    .with_ids(Arc::new(SequentialIds::new()))
}
