//! Run the validation checklist over one HTML file.

use meowssg_kernel::fallback::DEFAULT_SITE_URL;
use meowssg_kernel::validate::validate;
use serde_json::json;

use crate::support::read_file_or_exit;

pub fn run(file: String, base_url: Option<String>, json_output: bool) {
    let html = read_file_or_exit(&file);
    let site_url = base_url.unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
    let report = validate(&html, &site_url);

    if json_output {
        let payload = json!({
            "file": file,
            "valid": report.is_valid(),
            "missing": report.missing_names(),
            "wordCount": report.word_count,
            "internalLinkCount": report.internal_link_count,
        });
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
            eprintln!("error: failed to render validation payload: {e}");
            std::process::exit(2);
        });
        println!("{rendered}");
    } else if report.is_valid() {
        println!(
            "[validate] OK (words={}, internalLinks={})",
            report.word_count, report.internal_link_count
        );
    } else {
        println!("[validate] FAIL (missing={})", report.missing.len());
        for name in report.missing_names() {
            println!("  - {name}");
        }
    }

    if !report.is_valid() {
        std::process::exit(1);
    }
}
