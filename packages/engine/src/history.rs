//! Whole-document history.
//!
//! The timeline is a stack of full [`Site`](sitekit_dom::Site)
//! snapshots, oldest first, whose last entry is the live document.
//! Undo moves entries onto the undone stack (prepending, so undone
//! stays in document-chronological order); one redo splices the whole
//! undone run back. Committing a fresh change discards the undone run.

use tracing::debug;

use crate::engine::Engine;
use crate::errors::EngineResult;

impl Engine {
    /// Captures the current document and appends it to the timeline.
    pub fn commit(&self) {
        let snapshot = self.state.snapshot();
        self.state.timeline.update(|mut timeline| {
            timeline.push(snapshot);
            timeline
        });
        self.state.undone.set(Vec::new());
    }

    /// Whether an undo would change anything.
    pub fn can_undo(&self) -> bool {
        self.state.timeline.get().len() >= 2
    }

    /// Whether a redo would change anything.
    pub fn can_redo(&self) -> bool {
        !self.state.undone.get().is_empty()
    }

    /// Steps the document back one committed state.
    ///
    /// The last timeline entry is the live document, so at least two
    /// entries are needed; otherwise reports `Ok(false)` without
    /// touching any state.
    pub fn undo(&self) -> EngineResult<bool> {
        let mut timeline = self.state.timeline.get();
        if timeline.len() < 2 {
            return Ok(false);
        }
        let removed = timeline.pop();
        let restored = timeline.last().cloned();
        match (removed, restored) {
            (Some(removed), Some(restored)) => {
                debug!(remaining = timeline.len(), "Undoing site change");
                self.state.timeline.set(timeline);
                self.state.undone.update(|mut undone| {
                    undone.insert(0, removed);
                    undone
                });
                self.state.hydrate(restored);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Restores the entire undone run in one step.
    ///
    /// Undone entries resume their place after the current timeline
    /// tail; reports `Ok(false)` when there is nothing to redo.
    pub fn redo(&self) -> EngineResult<bool> {
        let undone = self.state.undone.get();
        if undone.is_empty() {
            return Ok(false);
        }
        let mut timeline = self.state.timeline.get();
        timeline.extend(undone);
        let restored = match timeline.last() {
            Some(site) => site.clone(),
            None => return Ok(false),
        };
        debug!(entries = timeline.len(), "Redoing undone site changes");
        self.state.timeline.set(timeline);
        self.state.undone.set(Vec::new());
        self.state.hydrate(restored);
        Ok(true)
    }
}
