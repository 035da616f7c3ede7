//! Document shell assembly: head metadata plus the body chrome every
//! page shares.

use meowssg_kernel::escape;
use meowssg_kernel::fallback::{
    BRAND, BUNDLE_SRC, HYDRATION_STATE_ID, STYLESHEET_HREF, fallback_footer, fallback_header,
};
use serde_json::Value;

/// Head metadata for one page.
#[derive(Debug, Clone)]
pub struct PageHead {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub og_type: &'static str,
    /// Structured-data payloads; the organization block is always
    /// emitted in addition to these.
    pub json_ld: Vec<Value>,
    pub last_modified: String,
}

/// Assemble the complete document: head, shared chrome, main content
/// inside the root mount, and the hydration bootstrap scripts.
pub fn build_document(head: &PageHead, main: &str, state: &Value) -> String {
    let title_text = escape::text(&head.title);
    let title_attr = escape::attr(&head.title);
    let description_attr = escape::attr(&head.description);
    let canonical = &head.canonical;
    let last_modified = escape::attr(&head.last_modified);
    let og_type = head.og_type;

    let json_ld_scripts: String = head
        .json_ld
        .iter()
        .map(|payload| {
            format!(
                "<script type=\"application/ld+json\">{}</script>\n",
                escape::script_json(&payload.to_string())
            )
        })
        .collect();

    let state_payload = escape::script_json(&state.to_string());

    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title_text}</title>\n\
<meta name=\"description\" content=\"{description_attr}\">\n\
<link rel=\"canonical\" href=\"{canonical}\">\n\
<link rel=\"stylesheet\" href=\"{STYLESHEET_HREF}\">\n\
<link rel=\"sitemap\" type=\"application/xml\" href=\"/sitemap.xml\">\n\
<meta name=\"last-modified\" content=\"{last_modified}\">\n\
<meta property=\"og:title\" content=\"{title_attr}\">\n\
<meta property=\"og:description\" content=\"{description_attr}\">\n\
<meta property=\"og:url\" content=\"{canonical}\">\n\
<meta property=\"og:type\" content=\"{og_type}\">\n\
<meta property=\"og:site_name\" content=\"{BRAND}\">\n\
{json_ld_scripts}\
</head>\n\
<body>\n\
{header}\n\
<main id=\"root\">\n{main}\n</main>\n\
{footer}\n\
<script id=\"{HYDRATION_STATE_ID}\" type=\"application/json\">{state_payload}</script>\n\
<script type=\"module\" src=\"{BUNDLE_SRC}\"></script>\n\
</body>\n\
</html>\n",
        header = fallback_header(),
        footer = fallback_footer(),
    )
}
