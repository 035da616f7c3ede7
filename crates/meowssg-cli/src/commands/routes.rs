//! Resolve and print the route set without building anything.

use meowssg_backend::{BackendClient, discover};
use meowssg_kernel::route::{Route, resolve_routes};
use serde_json::json;

use crate::support::{load_config_or_exit, runtime_or_exit};

pub fn run(config_path: String, json_output: bool) {
    let config = load_config_or_exit(&config_path);
    let runtime = runtime_or_exit();

    let backend = BackendClient::connect(&config.backend_config());
    let discovered = runtime.block_on(discover(backend.as_ref()));
    let (routes, rejected) = resolve_routes(
        &config.static_routes,
        &discovered.cat_ids,
        &discovered.blog_slugs,
        &discovered.event_ids,
    );

    if json_output {
        let payload = json!({
            "routes": routes.iter().map(Route::path).collect::<Vec<_>>(),
            "staticCount": config.static_routes.len(),
            "catCount": discovered.cat_ids.len(),
            "blogCount": discovered.blog_slugs.len(),
            "eventCount": discovered.event_ids.len(),
            "warnings": discovered.warnings,
            "rejected": rejected,
        });
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
            eprintln!("error: failed to render route payload: {e}");
            std::process::exit(2);
        });
        println!("{rendered}");
        return;
    }

    for warning in &discovered.warnings {
        eprintln!("[routes] WARN {warning}");
    }
    for path in &rejected {
        eprintln!("[routes] WARN ignoring malformed route {path:?}");
    }
    println!("[routes] OK (total={})", routes.len());
    for route in &routes {
        println!("  {route}");
    }
}
