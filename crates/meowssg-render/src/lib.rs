//! Page renderer: produce a complete HTML document per route.
//!
//! The pipeline depends only on the [`RenderPage`] trait; the built-in
//! [`SiteRenderer`] prefetches route data from the backend and renders
//! the MeowRescue pages. Tests inject scripted renderers through the
//! same seam.

pub mod copy;
pub mod document;
pub mod site;

use meowssg_kernel::route::Route;

pub use document::{PageHead, build_document};
pub use site::{SiteMeta, SiteRenderer};

/// A fully rendered page: the document plus the hydration state that
/// was embedded into it.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub state: serde_json::Value,
}

/// Errors from rendering one route.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The route does not correspond to any page this renderer knows.
    #[error("no page registered for route {0}")]
    UnknownRoute(String),

    /// A dynamic route whose entity disappeared between discovery and
    /// render.
    #[error("entity not found for route {0}")]
    EntityNotFound(String),

    /// Data prefetch failed.
    #[error(transparent)]
    Backend(#[from] meowssg_backend::BackendError),
}

/// The render seam: `route → { html, state }`.
///
/// Implementations prefetch whatever backend data the route needs so
/// hydration requires no further round-trips.
#[allow(async_fn_in_trait)]
pub trait RenderPage {
    async fn render(&self, route: &Route) -> Result<RenderedPage, RenderError>;
}
