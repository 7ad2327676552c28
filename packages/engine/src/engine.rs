//! The engine facade.
//!
//! One [`Engine`] owns a [`SiteState`] handle plus the collaborator
//! [`Services`] and exposes every document operation as a method. The
//! slots inside `SiteState` are shared handles, so cloning the state
//! into the engine aliases the caller's view rather than forking it.

use tracing::info;

use sitekit_dom::{Page, Symbol};
use sitekit_store::SiteState;

use crate::errors::{EngineError, EngineResult};
use crate::hydrate::HydrateRows;
use crate::propagate::PropagateSymbol;
use crate::services::Services;
use crate::walk;

pub struct Engine {
    pub(crate) state: SiteState,
    pub(crate) services: Services,
}

impl Engine {
    pub fn new(state: SiteState, services: Services) -> Self {
        Self { state, services }
    }

    /// The shared state this engine operates on.
    pub fn state(&self) -> &SiteState {
        &self.state
    }

    /// Propagates a symbol edit to every component row bound to it.
    ///
    /// Instance field values survive; everything else on matching rows
    /// is re-derived from the symbol. Structure and non-matching rows
    /// are untouched.
    pub async fn update_instances(&self, symbol: &Symbol) -> EngineResult<()> {
        info!(symbol_id = %symbol.id, "Starting symbol propagation");
        let transform = PropagateSymbol {
            services: &self.services,
            symbol,
        };
        let pages = walk::map_pages(self.state.pages.get(), &transform).await?;
        let page_count = pages.len();
        self.publish_pages(pages)?;
        info!(symbol_id = %symbol.id, pages = page_count, "Symbol propagation complete");
        Ok(())
    }

    /// Re-renders `rendered.html` for every component row in the page
    /// tree from its own raw source and current field values.
    pub async fn hydrate_components(&self) -> EngineResult<()> {
        info!("Starting component hydration");
        let transform = HydrateRows {
            services: &self.services,
        };
        let pages = walk::map_pages(self.state.pages.get(), &transform).await?;
        let page_count = pages.len();
        self.publish_pages(pages)?;
        info!(pages = page_count, "Component hydration complete");
        Ok(())
    }

    /// Publishes a rebuilt page list: the active page's content first,
    /// then the pages slot.
    pub(crate) fn publish_pages(&self, pages: Vec<Page>) -> EngineResult<()> {
        let active_id = self.state.active.id.get();
        let active = Page::find_by_id(&pages, &active_id)
            .ok_or_else(|| EngineError::ActivePageMissing(active_id.clone()))?;
        self.state.active.content.set(active.content.clone());
        self.state.pages.set(pages);
        Ok(())
    }
}
