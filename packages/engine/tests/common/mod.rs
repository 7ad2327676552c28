#![allow(dead_code)]

//! In-memory collaborators and document builders shared by the
//! integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::{json, Value};

use sitekit_dom::{
    Column, ComponentValue, Field, Page, RawContent, RenderedContent, Row, Section, Symbol,
};
use sitekit_engine::{
    DataConverter, DataScope, Engine, EngineResult, FieldFlattener, IdGenerator, Services,
    SiteState, TemplateData, TemplateEngine,
};

/// Depth-first flattener: parents precede their children, children are
/// stripped from the emitted copies.
pub struct DfsFlattener;

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

/// Maps each field's key to its value; null values become empty strings
/// rather than failing the conversion.
pub struct KeyValueConverter;

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
pub struct TokenTemplates;

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
pub struct SequentialIds {
    next: AtomicUsize,
}

impl SequentialIds {
    pub fn new() -> Self {
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
pub fn services() -> Services {
    Services::new(
        Arc::new(DfsFlattener),
        Arc::new(KeyValueConverter),
        Arc::new(TokenTemplates),
        Arc::new(TokenTemplates),
    )
    .with_ids(Arc::new(SequentialIds::new()))
}

/// A text field with a string value.
pub fn text_field(id: &str, key: &str, value: &str) -> Field {
    Field::new(id, key, json!(value))
}

/// The symbol most tests share: a templated heading with a default
/// title, plus id-scoped CSS and behavior code.
pub fn sample_symbol() -> Symbol {
    Symbol::new("sym1").with_value(ComponentValue {
        raw: RawContent {
            html: "<h1>{{title}}</h1>".to_string(),
            css: "div.heading h1 { color: red; }".to_string(),
            js: "import confetti from 'canvas-confetti'\ndocument.querySelector('#sym1').onclick = confetti".to_string(),
            fields: vec![text_field("f1", "title", "Hi")],
        },
        rendered: RenderedContent {
            html: "<h1>Hi</h1>".to_string(),
            css: "#sym1 h1 { color: red; }".to_string(),
            js: String::new(),
        },
    })
}

/// A component row bound to a symbol, carrying instance field values
/// and an empty raw facet for propagation to fill in.
pub fn component_row(id: &str, symbol_id: &str, fields: Vec<Field>) -> Row {
    Row::component(
        id,
        symbol_id,
        ComponentValue {
            raw: RawContent {
                fields,
                ..Default::default()
            },
            rendered: RenderedContent::default(),
        },
    )
}

/// A page holding the given rows in one section and one column. Ids are
/// derived from the page id so multiple pages stay distinct.
pub fn page_of(id: &str, rows: Vec<Row>) -> Page {
    Page::new(id).with_content(vec![Section {
        id: format!("{id}-s1"),
        width: Default::default(),
        columns: vec![Column {
            id: format!("{id}-c1"),
            size: String::new(),
            rows,
        }],
    }])
}

/// State preloaded with pages and symbols, with the first page active
/// and its content mirrored into the active-content slot.
pub fn state_with(pages: Vec<Page>, symbols: Vec<Symbol>) -> SiteState {
    let state = SiteState::new();
    if let Some(first) = pages.first() {
        state.active.id.set(first.id.clone());
        state.active.content.set(first.content.clone());
    }
    state.pages.set(pages);
    state.symbols.set(symbols);
    state
}

/// An engine over the given state using the in-memory services.
pub fn engine_over(state: &SiteState) -> Engine {
    Engine::new(state.clone(), services())
}

/// The component value of a row; panics on content rows.
pub fn component_value(row: &Row) -> &ComponentValue {
    match row {
        Row::Component { value, .. } => value,
        Row::Content { .. } => panic!("expected a component row"),
    }
}

/// The first row of the first column of the first section.
pub fn first_row(page: &Page) -> &Row {
    &page.content[0].columns[0].rows[0]
}
