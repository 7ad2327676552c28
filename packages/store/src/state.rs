//! The aggregate state context the engine operates on.

use serde_json::Value;
use sitekit_dom::{Field, Page, Section, Site, Symbol};

use crate::slot::Slot;

/// The page currently open in the editor: its id plus a live view of its
/// content. The content slot is what section edits write to; tree-wide
/// operations re-derive it from the page list after rebuilding.
#[derive(Debug, Clone, Default)]
pub struct ActivePage {
    pub id: Slot<String>,
    pub content: Slot<Vec<Section>>,
}

/// Where the focused section sits, if any. Only the containing section is
/// tracked; that is all section insertion needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusPath {
    pub section: Option<String>,
}

/// The editor's focus cursor: which node has focus, the caret position
/// within it, the selection index, and the path locating it in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusNode {
    pub id: String,
    pub position: usize,
    pub selection: usize,
    pub path: FocusPath,
}

/// Every slot the engine reads or writes, owned by one context object that
/// is passed to operations explicitly. Created at application start.
///
/// The first six slots are the document facets that together form a
/// [`Site`]; [`SiteState::snapshot`] captures them and
/// [`SiteState::hydrate`] replaces them wholesale. The remaining slots are
/// editor state (active page, focus cursor) and the undo/redo stacks.
#[derive(Debug, Clone, Default)]
pub struct SiteState {
    pub pages: Slot<Vec<Page>>,
    pub dependencies: Slot<Value>,
    pub styles: Slot<Value>,
    pub wrapper: Slot<Value>,
    pub fields: Slot<Vec<Field>>,
    pub symbols: Slot<Vec<Symbol>>,

    pub active: ActivePage,
    pub focus: Slot<FocusNode>,

    pub timeline: Slot<Vec<Site>>,
    pub undone: Slot<Vec<Site>>,
}

impl SiteState {
    /// Create an empty state context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all six document facets from a snapshot. Nothing is merged:
    /// this is the full overwrite that site loading, undo and redo share.
    pub fn hydrate(&self, site: Site) {
        self.pages.set(site.pages);
        self.dependencies.set(site.dependencies);
        self.styles.set(site.styles);
        self.wrapper.set(site.wrapper);
        self.fields.set(site.fields);
        self.symbols.set(site.symbols);
    }

    /// Capture the six document facets as one snapshot.
    pub fn snapshot(&self) -> Site {
        Site {
            pages: self.pages.get(),
            dependencies: self.dependencies.get(),
            styles: self.styles.get(),
            wrapper: self.wrapper.get(),
            fields: self.fields.get(),
            symbols: self.symbols.get(),
        }
    }
}
