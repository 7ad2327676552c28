//! # Sitekit DOM
//!
//! Value types for the site document tree.
//!
//! A [`Site`] is an ordered list of pages plus the shared facets that travel
//! with it (dependencies, styles, wrapper, top-level fields, and the symbol
//! library). Pages contain sections, sections contain columns, columns
//! contain rows. Rows are a tagged union: plain `content` rows carry literal
//! HTML, `component` rows reference a [`Symbol`] and carry an authored
//! (`raw`) facet and a derived (`final` on the wire, [`RenderedContent`] in
//! Rust) facet.
//!
//! Everything here is a plain `Clone` value type. Edits never mutate a
//! shared tree in place: operations build a new tree and publish it whole,
//! which is what makes whole-document snapshots cheap to reason about.
//!
//! The serde shapes stay wire-compatible with the JSON document format:
//! row variants are tagged by `"type"`, symbol references serialize as
//! `"symbolID"`, and the derived facet serializes as `"final"`.

pub mod fields;
pub mod site;

pub use fields::Field;
pub use site::{
    Column, ComponentValue, ContentValue, Page, RawContent, RenderedContent, Row, Section,
    SectionWidth, Site, Symbol,
};
