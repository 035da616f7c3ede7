//! Route type: a URL path scheduled for static HTML generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use crate::error::KernelError;

/// A normalized URL path (`/`, `/cats/123`, `/blog/some-slug`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    path: String,
}

/// Page family of a route, used for sitemap priority/changefreq and
/// renderer dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Home,
    CatList,
    CatDetail,
    BlogIndex,
    BlogPost,
    EventList,
    EventDetail,
    Info,
}

impl Route {
    /// Normalize a path into a route: leading slash required, trailing
    /// slash stripped (except the root), no whitespace or query/fragment
    /// parts.
    pub fn new(path: &str) -> Result<Self, KernelError> {
        let trimmed = path.trim();
        if trimmed.is_empty() || !trimmed.starts_with('/') {
            return Err(KernelError::InvalidRoute(format!(
                "path must start with '/': {path:?}"
            )));
        }
        if trimmed.chars().any(char::is_whitespace)
            || trimmed.contains('?')
            || trimmed.contains('#')
        {
            return Err(KernelError::InvalidRoute(format!(
                "path must not contain whitespace, query, or fragment: {path:?}"
            )));
        }
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/').to_string()
        } else {
            trimmed.to_string()
        };
        Ok(Self { path: normalized })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_home(&self) -> bool {
        self.path == "/"
    }

    /// Classify the route by its leading segments.
    pub fn kind(&self) -> RouteKind {
        let segments: Vec<&str> = self.path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => RouteKind::Home,
            ["cats"] => RouteKind::CatList,
            ["cats", _] => RouteKind::CatDetail,
            ["blog"] => RouteKind::BlogIndex,
            ["blog", _] => RouteKind::BlogPost,
            ["events"] => RouteKind::EventList,
            ["events", _] => RouteKind::EventDetail,
            _ => RouteKind::Info,
        }
    }

    /// Trailing path segment, when one exists (`/cats/123` → `123`).
    pub fn last_segment(&self) -> Option<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).next_back()
    }

    /// Output file path relative to the dist directory:
    /// `/` → `index.html`, `/foo/bar` → `foo/bar/index.html`.
    pub fn output_rel_path(&self) -> PathBuf {
        if self.is_home() {
            return PathBuf::from("index.html");
        }
        let mut out = PathBuf::new();
        for segment in self.path.split('/').filter(|s| !s.is_empty()) {
            out.push(segment);
        }
        out.push("index.html");
        out
    }

    /// Absolute canonical URL on the configured site origin.
    pub fn canonical_url(&self, site_url: &str) -> String {
        let origin = site_url.trim_end_matches('/');
        if self.is_home() {
            format!("{origin}/")
        } else {
            format!("{origin}{}", self.path)
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl RouteKind {
    /// Sitemap `<priority>` by page family.
    pub fn priority(&self) -> &'static str {
        match self {
            RouteKind::Home => "1.0",
            RouteKind::CatList => "0.9",
            RouteKind::BlogIndex | RouteKind::EventList => "0.8",
            RouteKind::CatDetail | RouteKind::BlogPost => "0.8",
            RouteKind::EventDetail => "0.7",
            RouteKind::Info => "0.6",
        }
    }

    /// Sitemap `<changefreq>` by page family.
    pub fn changefreq(&self) -> &'static str {
        match self {
            RouteKind::Home | RouteKind::CatList => "daily",
            RouteKind::BlogIndex | RouteKind::EventList => "daily",
            RouteKind::CatDetail | RouteKind::BlogPost | RouteKind::EventDetail => "weekly",
            RouteKind::Info => "monthly",
        }
    }
}

/// Union the static path list with discovered dynamic routes, preserving
/// first-occurrence order and dropping duplicates and malformed paths.
///
/// Malformed entries are returned alongside the routes so the caller can
/// log them without aborting resolution.
pub fn resolve_routes(
    static_paths: &[String],
    cat_ids: &[i64],
    blog_slugs: &[String],
    event_ids: &[i64],
) -> (Vec<Route>, Vec<String>) {
    let mut seen = BTreeSet::new();
    let mut routes = Vec::new();
    let mut rejected = Vec::new();

    let mut push = |candidate: String, rejected: &mut Vec<String>| match Route::new(&candidate) {
        Ok(route) => {
            if seen.insert(route.clone()) {
                routes.push(route);
            }
        }
        Err(_) => rejected.push(candidate),
    };

    for path in static_paths {
        push(path.clone(), &mut rejected);
    }
    for id in cat_ids {
        push(format!("/cats/{id}"), &mut rejected);
    }
    for slug in blog_slugs {
        push(format!("/blog/{slug}"), &mut rejected);
    }
    for id in event_ids {
        push(format!("/events/{id}"), &mut rejected);
    }

    (routes, rejected)
}
