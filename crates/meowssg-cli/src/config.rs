//! Site configuration: `meowssg.toml` with environment overrides.

use meowssg_backend::BackendConfig;
use meowssg_kernel::fallback::DEFAULT_SITE_URL;
use meowssg_render::copy::INFO_PAGES;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable overriding the configured site origin.
pub const ENV_SITE_URL: &str = "MEOWSSG_SITE_URL";

/// Environment variable overriding the configured output directory.
pub const ENV_OUT_DIR: &str = "MEOWSSG_OUT_DIR";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site_url: String,
    pub out_dir: String,
    pub static_routes: Vec<String>,
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendSettings {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            out_dir: "dist".to_string(),
            static_routes: default_static_routes(),
            backend: BackendSettings::default(),
        }
    }
}

/// The fixed public route list: the list pages plus every
/// informational page the renderer carries copy for.
pub fn default_static_routes() -> Vec<String> {
    let mut routes = vec![
        "/".to_string(),
        "/cats".to_string(),
        "/blog".to_string(),
        "/events".to_string(),
    ];
    routes.extend(INFO_PAGES.iter().map(|page| page.path.to_string()));
    routes
}

impl SiteConfig {
    /// Load from a TOML file, then apply environment overrides. A
    /// missing file at the default path yields the built-in defaults;
    /// a file that exists but fails to parse is an error.
    pub fn load(path: &str) -> Result<Self, String> {
        let mut config = if Path::new(path).exists() {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("failed to read config {path}: {e}"))?;
            toml::from_str::<SiteConfig>(&text)
                .map_err(|e| format!("failed to parse config {path}: {e}"))?
        } else {
            SiteConfig::default()
        };

        if let Ok(site_url) = std::env::var(ENV_SITE_URL)
            && !site_url.trim().is_empty()
        {
            config.site_url = site_url;
        }
        if let Ok(out_dir) = std::env::var(ENV_OUT_DIR)
            && !out_dir.trim().is_empty()
        {
            config.out_dir = out_dir;
        }
        Ok(config)
    }

    /// Backend connection settings: environment wins over the file.
    pub fn backend_config(&self) -> BackendConfig {
        let env = BackendConfig::from_env();
        BackendConfig {
            url: env.url.or_else(|| self.backend.url.clone()),
            anon_key: env.anon_key.or_else(|| self.backend.anon_key.clone()),
        }
    }
}
