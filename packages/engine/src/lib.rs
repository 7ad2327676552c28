//! # Sitekit Engine
//!
//! Synchronization and rendering engine for the sitekit document model.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ sitekit-dom: Site → Page → Section →        │
//! │              Column → Row, symbols, fields  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ sitekit-store: typed slots + SiteState      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ engine: document operations                 │
//! │  - Propagate symbol edits to instances      │
//! │  - Hydrate rendered HTML from field data    │
//! │  - Insert sections, manage pages/symbols    │
//! │  - Commit/undo/redo whole-site snapshots    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Replace on write**: every operation builds a new tree and
//!    publishes it to the state slots as one assignment
//! 2. **Derived output stays derived**: `final` facets are always
//!    recomputable from `raw` plus current field data
//! 3. **Collaborators behind traits**: templating, field flattening,
//!    data conversion and id generation are host-supplied [`Services`]
//! 4. **History is whole snapshots**: undo/redo replay full documents,
//!    never inverse deltas
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitekit_engine::{Engine, Services, SiteState};
//!
//! let state = SiteState::new();
//! state.hydrate(loaded_site);
//! state.active.id.set("index".to_string());
//!
//! let engine = Engine::new(state.clone(), services);
//!
//! // Propagate a symbol edit to every instance
//! engine.update_symbol(edited.clone());
//! engine.update_instances(&edited).await?;
//! engine.commit();
//!
//! // Step back
//! engine.undo()?;
//! ```

mod engine;
mod errors;
mod fields;
mod history;
mod hydrate;
mod pages;
mod propagate;
mod sections;
mod services;
mod symbols;
mod walk;

#[cfg(test)]
mod testutil;

pub use engine::Engine;
pub use errors::{EngineError, EngineResult};
pub use fields::{merge_fields, resolve, ResolvedFields};
pub use propagate::{BEHAVIOR_NAMESPACE, IMPORT_CDN_PREFIX};
pub use sections::NewSection;
pub use services::{
    DataConverter, DataScope, FieldFlattener, IdGenerator, Services, TemplateData, TemplateEngine,
    UuidIds,
};

// Re-export the types operations traffic in
pub use sitekit_dom::{Field, Page, Site, Symbol};
pub use sitekit_store::{FocusNode, FocusPath, SiteState};
