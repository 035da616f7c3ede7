//! Backend adapter for the hosted relational store.
//!
//! This crate is intentionally thin: it lists and fetches the entity
//! rows the pipeline needs (cats, published blog posts, events) over
//! the backend's REST surface and keeps no orchestration policy. A
//! missing connection configuration is not an error: every listing
//! degrades to an empty result so builds keep working offline.

use serde::{Deserialize, Serialize};

/// Environment variable carrying the backend base URL.
pub const ENV_URL: &str = "MEOWSSG_SUPABASE_URL";

/// Environment variable carrying the anonymous API key.
pub const ENV_ANON_KEY: &str = "MEOWSSG_SUPABASE_ANON_KEY";

/// Errors from talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed for {table}: {source}")]
    Request {
        table: &'static str,
        source: reqwest::Error,
    },

    #[error("backend returned status {status} for {table}")]
    Status { table: &'static str, status: u16 },

    #[error("unable to decode {table} rows: {source}")]
    Decode {
        table: &'static str,
        source: reqwest::Error,
    },
}

/// Connection settings, usually read from the environment.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl BackendConfig {
    /// Read connection settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var(ENV_URL).ok().filter(|v| !v.trim().is_empty()),
            anon_key: std::env::var(ENV_ANON_KEY)
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }
}

/// An adoptable cat row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age_estimate: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photos_urls: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A published blog post row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostRecord {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// An event row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_start: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Dynamic content discovered for route resolution, plus the warnings
/// accumulated while discovering it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoveredContent {
    pub cat_ids: Vec<i64>,
    pub blog_slugs: Vec<String>,
    pub event_ids: Vec<i64>,
    pub warnings: Vec<String>,
}

/// Thin client around the backend REST surface.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base: String,
    anon_key: String,
}

impl BackendClient {
    /// Connect from settings; `None` when the configuration is absent.
    pub fn connect(config: &BackendConfig) -> Option<Self> {
        let url = config.url.as_deref()?;
        let anon_key = config.anon_key.as_deref()?;
        Some(Self {
            http: reqwest::Client::new(),
            base: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    async fn rows<T>(&self, table: &'static str, query: &str) -> Result<Vec<T>, BackendError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/rest/v1/{table}?{query}", self.base);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .send()
            .await
            .map_err(|source| BackendError::Request { table, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                table,
                status: status.as_u16(),
            });
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|source| BackendError::Decode { table, source })
    }

    /// All cats currently listed for the public site.
    pub async fn list_cats(&self) -> Result<Vec<CatRecord>, BackendError> {
        self.rows("cats", "select=*&order=id.asc").await
    }

    /// Published blog posts only.
    pub async fn list_blog_posts(&self) -> Result<Vec<BlogPostRecord>, BackendError> {
        self.rows(
            "blog_posts",
            "select=*&is_published=eq.true&order=published_at.desc",
        )
        .await
    }

    /// All events, soonest first.
    pub async fn list_events(&self) -> Result<Vec<EventRecord>, BackendError> {
        self.rows("events", "select=*&order=date_start.asc").await
    }

    /// One cat by id; `None` when the row is gone.
    pub async fn fetch_cat(&self, id: i64) -> Result<Option<CatRecord>, BackendError> {
        let mut rows: Vec<CatRecord> = self.rows("cats", &format!("select=*&id=eq.{id}")).await?;
        Ok(rows.drain(..).next())
    }

    /// One published blog post by slug.
    pub async fn fetch_blog_post(
        &self,
        slug: &str,
    ) -> Result<Option<BlogPostRecord>, BackendError> {
        let mut rows: Vec<BlogPostRecord> = self
            .rows(
                "blog_posts",
                &format!("select=*&is_published=eq.true&slug=eq.{slug}"),
            )
            .await?;
        Ok(rows.drain(..).next())
    }

    /// One event by id.
    pub async fn fetch_event(&self, id: i64) -> Result<Option<EventRecord>, BackendError> {
        let mut rows: Vec<EventRecord> =
            self.rows("events", &format!("select=*&id=eq.{id}")).await?;
        Ok(rows.drain(..).next())
    }
}

/// Discover dynamic content for route resolution.
///
/// A failed query for one entity type contributes an empty list and a
/// warning; it never aborts discovery of the other types. With no
/// client at all, every list is empty and a single warning records the
/// degradation.
pub async fn discover(client: Option<&BackendClient>) -> DiscoveredContent {
    let Some(client) = client else {
        return DiscoveredContent {
            warnings: vec![
                "backend not configured; dynamic route discovery skipped".to_string(),
            ],
            ..DiscoveredContent::default()
        };
    };

    let (cats, posts, events) = tokio::join!(
        client.list_cats(),
        client.list_blog_posts(),
        client.list_events()
    );

    let mut discovered = DiscoveredContent::default();
    match cats {
        Ok(rows) => discovered.cat_ids = rows.into_iter().map(|c| c.id).collect(),
        Err(e) => discovered.warnings.push(format!("cat discovery failed: {e}")),
    }
    match posts {
        Ok(rows) => discovered.blog_slugs = rows.into_iter().map(|p| p.slug).collect(),
        Err(e) => discovered
            .warnings
            .push(format!("blog post discovery failed: {e}")),
    }
    match events {
        Ok(rows) => discovered.event_ids = rows.into_iter().map(|e| e.id).collect(),
        Err(e) => discovered
            .warnings
            .push(format!("event discovery failed: {e}")),
    }
    discovered
}
