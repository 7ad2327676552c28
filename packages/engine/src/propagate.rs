//! Symbol propagation.
//!
//! Editing a symbol must reach every component row bound to it. For each
//! instance the engine keeps the row's field values, adopts the symbol's
//! source facets, and derives fresh output: templated HTML with the row
//! id injected, the symbol's rendered CSS re-scoped to the row id, and
//! behavior code rewritten for the row (CDN imports, id scoping, and a
//! data preamble).

use futures::future::BoxFuture;
use futures::FutureExt;
use regex::Regex;
use serde_json::Value;

use sitekit_dom::{ComponentValue, RawContent, RenderedContent, Symbol};

use crate::errors::EngineResult;
use crate::fields::{merge_fields, resolve, ResolvedFields};
use crate::services::Services;
use crate::walk::RowTransform;

/// CDN prefix bare module specifiers are rewritten against.
pub const IMPORT_CDN_PREFIX: &str = "https://cdn.skypack.dev/";

/// Name of the namespace object injected ahead of behavior code.
pub const BEHAVIOR_NAMESPACE: &str = "sitekit";

/// Rewrites component rows bound to one symbol; all other rows pass
/// through untouched.
pub(crate) struct PropagateSymbol<'e> {
    pub services: &'e Services,
    pub symbol: &'e Symbol,
}

impl RowTransform for PropagateSymbol<'_> {
    fn apply<'a>(
        &'a self,
        id: &'a str,
        symbol_id: &'a str,
        value: ComponentValue,
    ) -> BoxFuture<'a, EngineResult<ComponentValue>> {
        async move {
            if symbol_id != self.symbol.id {
                return Ok(value);
            }
            self.render_instance(id, value).await
        }
        .boxed()
    }
}

impl PropagateSymbol<'_> {
    /// Rebuilds one instance from the symbol's facets and the instance's
    /// own field values.
    async fn render_instance(
        &self,
        row_id: &str,
        value: ComponentValue,
    ) -> EngineResult<ComponentValue> {
        let symbol = &self.symbol.value;
        let merged = merge_fields(&symbol.raw.fields, &value.raw.fields);
        let resolved = resolve(self.services, &merged).await?;

        // The template sees the instance id alongside the field data.
        let mut data = resolved.data.clone();
        data.insert("id".to_string(), Value::String(row_id.to_string()));
        let html = self.services.html.render(&symbol.raw.html, &data).await?;

        // Rendered CSS is already scoped to the symbol id; retarget it.
        let css = symbol.rendered.css.replace(&self.symbol.id, row_id);
        let js = scope_behavior(&symbol.raw.js, &self.symbol.id, row_id, &resolved)?;

        Ok(ComponentValue {
            raw: RawContent {
                html: symbol.raw.html.clone(),
                css: symbol.raw.css.clone(),
                js: symbol.raw.js.clone(),
                fields: merged,
            },
            rendered: RenderedContent { html, css, js },
        })
    }
}

/// Prepares a symbol's behavior source to run inside one instance.
///
/// Bare imports are pointed at the CDN, symbol-id references are
/// retargeted to the row id, and a namespace preamble exposes the
/// instance id, its data, and the flattened field list.
pub(crate) fn scope_behavior(
    js: &str,
    symbol_id: &str,
    row_id: &str,
    fields: &ResolvedFields,
) -> EngineResult<String> {
    let cdn = rewrite_bare_imports(js);
    let rescoped = cdn.replace(symbol_id, row_id);
    let data = serde_json::to_string(&fields.data)?;
    let leaves = serde_json::to_string(&fields.leaves)?;
    Ok(format!(
        "const {BEHAVIOR_NAMESPACE} = {{\n  id: '{row_id}',\n  data: {data},\n  fields: {leaves}\n}}\n{rescoped}"
    ))
}

/// Rewrites `import x from 'specifier'` statements whose specifier is
/// not already a URL to load from the CDN.
fn rewrite_bare_imports(js: &str) -> String {
    // Matches default imports with either quote style.
    let re = Regex::new(r#"import (\w+) from ['"]([^'"]+)['"]"#).unwrap();
    re.replace_all(js, |caps: &regex::Captures| {
        let specifier = &caps[2];
        if specifier.starts_with("http") {
            caps[0].to_string()
        } else {
            format!("import {} from '{}{}'", &caps[1], IMPORT_CDN_PREFIX, specifier)
        }
    })
    .into_owned()
}
