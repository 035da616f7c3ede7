//! The full pre-render build: resolve → render → validate → fix →
//! write, then the build-wide artifacts.

use meowssg_backend::{BackendClient, discover};
use meowssg_kernel::fix::{FixOptions, fix};
use meowssg_kernel::route::{Route, resolve_routes};
use meowssg_kernel::validate::validate;
use meowssg_output::artifacts::{ensure_assets, ensure_robots, verify_index, write_redirects, write_sitemap};
use meowssg_output::{BuildSummary, OutputWriter};
use meowssg_render::{RenderPage, SiteMeta, SiteRenderer};
use serde_json::json;

use crate::support::{build_date, load_config_or_exit, runtime_or_exit};

pub struct Args {
    pub config: String,
    pub out: Option<String>,
    pub base_url: Option<String>,
    pub json: bool,
}

pub fn run(args: Args) {
    let mut config = load_config_or_exit(&args.config);
    if let Some(out) = args.out {
        config.out_dir = out;
    }
    if let Some(base_url) = args.base_url {
        config.site_url = base_url;
    }

    let date = build_date();
    let writer = OutputWriter::new(&config.out_dir, &config.site_url, &date).unwrap_or_else(|e| {
        eprintln!("error: failed to prepare output directory: {e}");
        std::process::exit(1);
    });
    if let Err(e) = writer.clean() {
        eprintln!("error: failed to clean output directory: {e}");
        std::process::exit(1);
    }

    let runtime = runtime_or_exit();
    let backend = BackendClient::connect(&config.backend_config());
    if backend.is_none() {
        eprintln!("[routes] WARN backend not configured; static routes only");
    }

    let discovered = runtime.block_on(discover(backend.as_ref()));
    for warning in &discovered.warnings {
        eprintln!("[routes] WARN {warning}");
    }
    let (routes, rejected) = resolve_routes(
        &config.static_routes,
        &discovered.cat_ids,
        &discovered.blog_slugs,
        &discovered.event_ids,
    );
    for path in &rejected {
        eprintln!("[routes] WARN ignoring malformed route {path:?}");
    }
    if !args.json {
        println!(
            "[routes] OK (static={}, cats={}, blog={}, events={}, total={})",
            config.static_routes.len(),
            discovered.cat_ids.len(),
            discovered.blog_slugs.len(),
            discovered.event_ids.len(),
            routes.len()
        );
    }

    let renderer = SiteRenderer::new(
        SiteMeta {
            site_url: config.site_url.clone(),
            build_date: date.clone(),
        },
        backend,
    );
    let summary = runtime.block_on(run_pipeline(&renderer, &routes, &writer));

    let artifacts = (|| -> Result<bool, meowssg_output::OutputError> {
        write_sitemap(&writer, &routes)?;
        ensure_robots(&writer)?;
        write_redirects(&writer)?;
        ensure_assets(&writer)?;
        verify_index(&writer)
    })();
    let index_regenerated = match artifacts {
        Ok(regenerated) => regenerated,
        Err(e) => {
            eprintln!("error: failed to write build artifacts: {e}");
            std::process::exit(1);
        }
    };
    if index_regenerated {
        eprintln!("[write] WARN index.html was missing or invalid; regenerated from fallback");
    }

    if args.json {
        let payload = json!({
            "outDir": config.out_dir,
            "siteUrl": config.site_url,
            "routeCount": routes.len(),
            "successCount": summary.success_count,
            "errorCount": summary.error_count,
            "fixedCount": summary.fixed_count,
            "failedRoutes": summary.failed_routes,
            "indexRegenerated": index_regenerated,
        });
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
            eprintln!("error: failed to render build summary: {e}");
            std::process::exit(2);
        });
        println!("{rendered}");
    } else {
        println!(
            "[build] OK (routes={}, written={}, fixed={}, errors={})",
            routes.len(),
            summary.success_count,
            summary.fixed_count,
            summary.error_count
        );
        for failed in &summary.failed_routes {
            println!("  - {}: {}", failed.route, failed.error);
        }
    }
    // Partial success still exits 0; only fatal build-step failures
    // abort with a non-zero code.
}

/// Render, validate, repair, and write each route in sequence. One
/// failing route is recorded and skipped; the rest of the build goes
/// on.
pub async fn run_pipeline<R: RenderPage>(
    renderer: &R,
    routes: &[Route],
    writer: &OutputWriter,
) -> BuildSummary {
    let mut summary = BuildSummary::default();
    let fix_opts = FixOptions {
        site_url: writer.site_url().to_string(),
        last_modified: writer.build_date().to_string(),
    };

    for route in routes {
        let page = match renderer.render(route).await {
            Ok(page) => page,
            Err(e) => {
                eprintln!("[render] WARN {route}: {e}");
                summary.record_error(route, e.to_string());
                continue;
            }
        };

        let report = validate(&page.html, writer.site_url());
        let html = if report.is_valid() {
            page.html
        } else {
            eprintln!(
                "[fix] WARN {route}: repairing, missing {:?}",
                report.missing_names()
            );
            summary.record_fixed();
            let fixed = fix(route, &page.html, &fix_opts);
            debug_assert!(
                validate(&fixed, writer.site_url()).is_valid(),
                "fixer output must satisfy the checklist"
            );
            fixed
        };

        match writer.write_route(route, &html) {
            Ok((_, outcome)) => {
                if outcome.touched() {
                    eprintln!(
                        "[write] WARN {route}: floor injection (links={}, words={}, head={:?})",
                        outcome.injected_links, outcome.injected_words, outcome.patched_head
                    );
                }
                summary.record_written();
            }
            Err(e) => {
                eprintln!("[write] WARN {route}: {e}");
                summary.record_error(route, e.to_string());
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use meowssg_render::{RenderError, RenderedPage};
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Scripted renderer: route path → canned result.
    struct ScriptedRenderer {
        pages: BTreeMap<String, String>,
    }

    impl RenderPage for ScriptedRenderer {
        async fn render(&self, route: &Route) -> Result<RenderedPage, RenderError> {
            match self.pages.get(route.path()) {
                Some(html) => Ok(RenderedPage {
                    html: html.clone(),
                    state: serde_json::json!({ "route": route.path() }),
                }),
                None => Err(RenderError::EntityNotFound(route.path().to_string())),
            }
        }
    }

    fn temp_writer(prefix: &str) -> (OutputWriter, PathBuf) {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "meowssg-build-{prefix}-{}-{unique}",
            std::process::id()
        ));
        let writer = OutputWriter::new(&dir, "https://meowrescue.org", "2026-08-07")
            .expect("writer should create its directory");
        (writer, dir)
    }

    fn block_on<F: Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("test runtime should build")
            .block_on(future)
    }

    #[test]
    fn failing_route_is_counted_once_and_isolated() {
        let (writer, dir) = temp_writer("isolated");
        let routes = vec![
            Route::new("/").expect("route should parse"),
            Route::new("/cats/404").expect("route should parse"),
            Route::new("/about").expect("route should parse"),
        ];
        let renderer = ScriptedRenderer {
            pages: BTreeMap::from([
                ("/".to_string(), "<p>home</p>".to_string()),
                ("/about".to_string(), "<p>about</p>".to_string()),
            ]),
        };

        let summary = block_on(run_pipeline(&renderer, &routes, &writer));

        assert_eq!(summary.success_count, 2);
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.failed_routes.len(), 1);
        assert_eq!(summary.failed_routes[0].route.path(), "/cats/404");
        assert!(dir.join("index.html").exists());
        assert!(dir.join("about/index.html").exists());
        assert!(!dir.join("cats/404/index.html").exists());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn invalid_renders_are_repaired_and_written_valid() {
        let (writer, dir) = temp_writer("repair");
        let routes = vec![Route::new("/volunteer").expect("route should parse")];
        let renderer = ScriptedRenderer {
            pages: BTreeMap::from([(
                "/volunteer".to_string(),
                "<div id=\"root\"><p>thin page</p></div>".to_string(),
            )]),
        };

        let summary = block_on(run_pipeline(&renderer, &routes, &writer));
        assert_eq!(summary.fixed_count, 1);
        assert_eq!(summary.success_count, 1);

        let written = std::fs::read_to_string(dir.join("volunteer/index.html"))
            .expect("repaired page should be written");
        assert!(validate(&written, "https://meowrescue.org").is_valid());
        assert!(written.contains("thin page"));

        let _ = std::fs::remove_dir_all(dir);
    }
}
