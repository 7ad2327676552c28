//! Page list management.
//!
//! Pages nest one level through a path: an empty path targets the
//! top-level list, otherwise the path root names the top-level page
//! whose nested list is edited. A path that resolves to no page is
//! reported by the return value, never as an error.

use tracing::warn;

use sitekit_dom::Page;

use crate::engine::Engine;

impl Engine {
    /// Adds a page under the path root, or top-level for an empty path.
    /// Returns whether the page list was updated.
    pub fn add_page(&self, page: Page, path: &[String]) -> bool {
        let mut pages = self.state.pages.get();
        match path.first() {
            None => pages.push(page),
            Some(parent_id) => match pages.iter_mut().find(|p| p.id == *parent_id) {
                Some(parent) => parent.pages.push(page),
                None => {
                    warn!(parent_id = %parent_id, "Page path did not resolve; add skipped");
                    return false;
                }
            },
        }
        self.state.pages.set(pages);
        true
    }

    /// Deletes the page with the given id from under the path root, or
    /// from the top level for an empty path. Returns whether the page
    /// list was updated.
    pub fn delete_page(&self, page_id: &str, path: &[String]) -> bool {
        let mut pages = self.state.pages.get();
        match path.first() {
            None => pages.retain(|p| p.id != page_id),
            Some(parent_id) => match pages.iter_mut().find(|p| p.id == *parent_id) {
                Some(parent) => parent.pages.retain(|p| p.id != page_id),
                None => {
                    warn!(parent_id = %parent_id, "Page path did not resolve; delete skipped");
                    return false;
                }
            },
        }
        self.state.pages.set(pages);
        true
    }
}
