//! Repair one HTML file into a complete, valid document.

use meowssg_kernel::fallback::DEFAULT_SITE_URL;
use meowssg_kernel::fix::{FixOptions, fix};
use meowssg_kernel::validate::validate;
use serde_json::json;

use crate::support::{build_date, parse_route_or_exit, read_file_or_exit};

pub fn run(
    file: String,
    route: String,
    output: Option<String>,
    base_url: Option<String>,
    json_output: bool,
) {
    let html = read_file_or_exit(&file);
    let route = parse_route_or_exit(&route);
    let site_url = base_url.unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

    let before = validate(&html, &site_url);
    let fixed = fix(
        &route,
        &html,
        &FixOptions {
            site_url: site_url.clone(),
            last_modified: build_date(),
        },
    );

    if let Some(output_path) = &output {
        if let Err(e) = std::fs::write(output_path, &fixed) {
            eprintln!("error: failed to write {output_path}: {e}");
            std::process::exit(1);
        }
    }

    if json_output {
        let payload = json!({
            "file": file,
            "route": route.path(),
            "wasValid": before.is_valid(),
            "missingBefore": before.missing_names(),
            "output": output,
        });
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
            eprintln!("error: failed to render fix payload: {e}");
            std::process::exit(2);
        });
        println!("{rendered}");
    } else if let Some(output_path) = &output {
        println!(
            "[fix] OK (route={}, missingBefore={}, out={output_path})",
            route,
            before.missing.len()
        );
    } else {
        print!("{fixed}");
    }
}
