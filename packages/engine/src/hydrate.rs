//! Component hydration.
//!
//! Hydration re-renders the HTML facet of component rows from their own
//! raw source and current field values. Unlike propagation it involves
//! no symbol lookup and touches nothing but `rendered.html`: CSS and
//! behavior output stay as propagation last produced them.

use futures::future::BoxFuture;
use futures::FutureExt;

use sitekit_dom::{ComponentValue, RawContent};

use crate::errors::EngineResult;
use crate::fields::resolve;
use crate::services::Services;
use crate::walk::RowTransform;

/// Refreshes `rendered.html` on every component row it visits.
pub(crate) struct HydrateRows<'e> {
    pub services: &'e Services,
}

impl RowTransform for HydrateRows<'_> {
    fn apply<'a>(
        &'a self,
        _id: &'a str,
        _symbol_id: &'a str,
        mut value: ComponentValue,
    ) -> BoxFuture<'a, EngineResult<ComponentValue>> {
        async move {
            let html = render_raw_html(self.services, &value.raw).await?;
            value.rendered.html = html;
            Ok(value)
        }
        .boxed()
    }
}

/// Renders raw HTML against data derived from its own fields.
///
/// No instance id is injected here; only propagation does that.
pub(crate) async fn render_raw_html(services: &Services, raw: &RawContent) -> EngineResult<String> {
    let resolved = resolve(services, &raw.fields).await?;
    services.handlebars.render(&raw.html, &resolved.data).await
}
