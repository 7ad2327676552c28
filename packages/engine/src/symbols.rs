//! Symbol library management.

use futures::future::try_join_all;
use tracing::{debug, info};

use sitekit_dom::Symbol;

use crate::engine::Engine;
use crate::errors::EngineResult;
use crate::hydrate::render_raw_html;
use crate::services::Services;

impl Engine {
    /// Adds a symbol to the library. Newest entries come first.
    pub fn add_symbol(&self, symbol: Symbol) {
        self.state.symbols.update(|mut symbols| {
            symbols.insert(0, symbol);
            symbols
        });
    }

    /// Replaces the library entry with the same id. Absent ids are a
    /// no-op. Instances are not touched; callers follow up with
    /// [`Engine::update_instances`] to push the edit out.
    pub fn update_symbol(&self, symbol: Symbol) {
        self.state.symbols.update(|mut symbols| {
            if let Some(existing) = symbols.iter_mut().find(|s| s.id == symbol.id) {
                *existing = symbol;
            }
            symbols
        });
    }

    /// Drops the library entry with the given id.
    pub fn remove_symbol(&self, id: &str) {
        self.state.symbols.update(|mut symbols| {
            symbols.retain(|s| s.id != id);
            symbols
        });
    }

    /// Re-renders `rendered.html` for every symbol in the library from
    /// its own raw source and field values.
    pub async fn hydrate_symbols(&self) -> EngineResult<()> {
        let symbols = self.state.symbols.get();
        info!(count = symbols.len(), "Starting symbol library hydration");
        let updated = try_join_all(
            symbols
                .into_iter()
                .map(|symbol| hydrate_symbol(&self.services, symbol)),
        )
        .await?;
        self.state.symbols.set(updated);
        info!("Symbol library hydration complete");
        Ok(())
    }
}

async fn hydrate_symbol(services: &Services, mut symbol: Symbol) -> EngineResult<Symbol> {
    debug!(symbol_id = %symbol.id, "Hydrating symbol");
    let html = render_raw_html(services, &symbol.value.raw).await?;
    symbol.value.rendered.html = html;
    Ok(symbol)
}
