//! Field merging and resolution.

use sitekit_dom::Field;

use crate::errors::EngineResult;
use crate::services::{DataScope, Services, TemplateData};

/// Flattened field leaves plus the template data derived from them.
///
/// Both halves are kept because behavior scoping embeds the leaves
/// verbatim while templates consume the converted data.
#[derive(Debug, Clone)]
pub struct ResolvedFields {
    pub leaves: Vec<Field>,
    pub data: TemplateData,
}

/// Merges a symbol's field definitions with an instance's overrides.
///
/// The symbol is authoritative for field structure: its fields come
/// first and keep their key, label, type and children. Instance fields
/// contribute only their values, except fields the symbol no longer
/// declares, which are appended unchanged.
pub fn merge_fields(symbol_fields: &[Field], instance_fields: &[Field]) -> Vec<Field> {
    let mut merged = symbol_fields.to_vec();
    for field in instance_fields {
        match merged.iter_mut().find(|f| f.id == field.id) {
            Some(existing) => existing.value = field.value.clone(),
            None => merged.push(field.clone()),
        }
    }
    merged
}

/// Flattens a field tree and converts the leaves to template data.
pub async fn resolve(services: &Services, fields: &[Field]) -> EngineResult<ResolvedFields> {
    let leaves = services.flattener.flatten(fields);
    let data = services.converter.convert(&leaves, DataScope::All).await?;
    Ok(ResolvedFields { leaves, data })
}
