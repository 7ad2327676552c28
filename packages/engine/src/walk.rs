//! Concurrent traversal over component rows.
//!
//! Propagation and hydration both visit every component row in a page
//! tree while leaving content rows and the surrounding structure
//! untouched. The traversal lives here once; callers supply the
//! per-row work as a [`RowTransform`].

use futures::future::{try_join_all, BoxFuture};
use futures::FutureExt;

use sitekit_dom::{Column, ComponentValue, Page, Row, Section};

use crate::errors::EngineResult;

/// Async rewrite applied to each component row.
///
/// Sibling rows run concurrently, so implementations must not rely on
/// visit order.
pub(crate) trait RowTransform: Sync {
    fn apply<'a>(
        &'a self,
        id: &'a str,
        symbol_id: &'a str,
        value: ComponentValue,
    ) -> BoxFuture<'a, EngineResult<ComponentValue>>;
}

/// Rewrites component rows across a whole page forest, nested pages
/// included.
pub(crate) async fn map_pages<T>(pages: Vec<Page>, transform: &T) -> EngineResult<Vec<Page>>
where
    T: RowTransform,
{
    try_join_all(pages.into_iter().map(|page| map_page(page, transform))).await
}

fn map_page<'a, T>(page: Page, transform: &'a T) -> BoxFuture<'a, EngineResult<Page>>
where
    T: RowTransform,
{
    async move {
        let Page { id, content, pages } = page;
        let content = map_sections(content, transform).await?;
        let pages = try_join_all(pages.into_iter().map(|sub| map_page(sub, transform))).await?;
        Ok(Page { id, content, pages })
    }
    .boxed()
}

/// Rewrites component rows within one page's sections.
pub(crate) async fn map_sections<T>(
    sections: Vec<Section>,
    transform: &T,
) -> EngineResult<Vec<Section>>
where
    T: RowTransform,
{
    try_join_all(
        sections
            .into_iter()
            .map(|section| map_section(section, transform)),
    )
    .await
}

async fn map_section<T>(section: Section, transform: &T) -> EngineResult<Section>
where
    T: RowTransform,
{
    let Section { id, width, columns } = section;
    let columns = try_join_all(
        columns
            .into_iter()
            .map(|column| map_column(column, transform)),
    )
    .await?;
    Ok(Section { id, width, columns })
}

async fn map_column<T>(column: Column, transform: &T) -> EngineResult<Column>
where
    T: RowTransform,
{
    let Column { id, size, rows } = column;
    let rows = try_join_all(rows.into_iter().map(|row| map_row(row, transform))).await?;
    Ok(Column { id, size, rows })
}

async fn map_row<T>(row: Row, transform: &T) -> EngineResult<Row>
where
    T: RowTransform,
{
    match row {
        Row::Component {
            id,
            symbol_id,
            value,
        } => {
            let value = transform.apply(&id, &symbol_id, value).await?;
            Ok(Row::Component {
                id,
                symbol_id,
                value,
            })
        }
        row => Ok(row),
    }
}
