//! # Sitekit Store
//!
//! Process-wide state containers for the editing engine.
//!
//! A [`Slot`] is a typed cell with `get`/`set`/`update`/`subscribe` and
//! whole-value replace semantics: readers receive clones, writers publish a
//! complete new value in one assignment, and nothing hands out references
//! into shared interior state. That discipline is what lets the engine build
//! a new document tree off to the side and make it visible atomically.
//!
//! [`SiteState`] aggregates every slot the engine operates on (the six
//! document facets, the active-page pair, the focus cursor, and the
//! timeline/undone snapshot stacks) into one context object that is passed
//! to operations explicitly rather than imported globally. It is created at
//! application start and dropped at shutdown.

pub mod slot;
pub mod state;

pub use slot::{Slot, Subscription};
pub use state::{ActivePage, FocusNode, FocusPath, SiteState};
