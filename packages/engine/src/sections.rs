//! Section insertion.

use serde::{Deserialize, Serialize};

use sitekit_dom::{Column, Row, Section, SectionWidth};

use crate::engine::Engine;

/// Shape of a section to insert: overall width plus one layout size per
/// requested column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSection {
    #[serde(default)]
    pub fullwidth: bool,
    pub columns: Vec<String>,
}

impl Engine {
    /// Builds a section from the request and inserts it into the active
    /// page's content.
    ///
    /// Placement follows the focus cursor: no focused section appends to
    /// the end; focus on the first position with selection 1 prepends
    /// before all content; any other focus appends.
    pub fn insert_section(&self, section: NewSection) {
        let focus = self.state.focus.get();
        let built = self.build_section(&section);
        self.state.active.content.update(|mut content| {
            if focus.path.section.is_none() {
                content.push(built);
            } else if focus.position == 0 && focus.selection == 1 {
                content.insert(0, built);
            } else {
                content.push(built);
            }
            content
        });
    }

    /// A fresh section: new ids throughout, one column per requested
    /// size, each seeded with one empty content row.
    fn build_section(&self, section: &NewSection) -> Section {
        let width = if section.fullwidth {
            SectionWidth::Fullwidth
        } else {
            SectionWidth::Contained
        };
        Section {
            id: self.services.ids.generate(),
            width,
            columns: section
                .columns
                .iter()
                .map(|size| Column {
                    id: self.services.ids.generate(),
                    size: size.clone(),
                    rows: vec![Row::content(self.services.ids.generate(), "")],
                })
                .collect(),
        }
    }
}
