use crate::config::SiteConfig;
use meowssg_kernel::route::Route;

pub fn load_config_or_exit(path: &str) -> SiteConfig {
    SiteConfig::load(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn parse_route_or_exit(path: &str) -> Route {
    Route::new(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn read_file_or_exit(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {path}: {e}");
        std::process::exit(1);
    })
}

pub fn runtime_or_exit() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("error: failed to start async runtime: {e}");
            std::process::exit(1);
        })
}

/// Build date stamped into freshness metadata and the sitemap.
pub fn build_date() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
