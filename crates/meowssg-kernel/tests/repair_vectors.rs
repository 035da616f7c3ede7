//! Integration tests: adversarial repair vectors.
//!
//! Each vector is a deliberately broken document. The property under
//! test is the round-trip contract: whatever the validator rejects, the
//! fixer must turn into a document the validator accepts, and fixing
//! the fixer's own output must stay accepted.

use meowssg_kernel::fix::{FixOptions, fix};
use meowssg_kernel::route::Route;
use meowssg_kernel::validate::validate;

const SITE: &str = "https://meowrescue.org";

fn opts() -> FixOptions {
    FixOptions {
        site_url: SITE.to_string(),
        last_modified: "2026-08-07".to_string(),
    }
}

fn assert_repairs(name: &str, path: &str, input: &str) {
    let route = Route::new(path).expect("vector route should parse");
    let before = validate(input, SITE);
    assert!(
        !before.is_valid(),
        "vector {name}: input unexpectedly passed the checklist"
    );

    let fixed = fix(&route, input, &opts());
    let after = validate(&fixed, SITE);
    assert!(
        after.is_valid(),
        "vector {name}: fixed output still missing {:?}",
        after.missing_names()
    );

    let refixed = fix(&route, &fixed, &opts());
    let again = validate(&refixed, SITE);
    assert!(
        again.is_valid(),
        "vector {name}: re-fixed output regressed, missing {:?}",
        again.missing_names()
    );
}

#[test]
fn empty_document() {
    assert_repairs("empty", "/", "");
}

#[test]
fn whitespace_only() {
    assert_repairs("whitespace", "/cats", "   \n\t  ");
}

#[test]
fn bare_fragment() {
    assert_repairs("fragment", "/adopt", "<p>adopt a cat today</p>");
}

#[test]
fn headless_body() {
    assert_repairs(
        "headless",
        "/blog/kitten-season",
        "<body><div id=\"root\"><h2>Kitten Season</h2><p>It is upon us.</p></div></body>",
    );
}

#[test]
fn unclosed_tags() {
    assert_repairs(
        "unclosed",
        "/events/3",
        "<html><body><div id=\"root\"><h1>Open House<p>Join us",
    );
}

#[test]
fn head_without_required_metadata() {
    assert_repairs(
        "bare-head",
        "/donate",
        "<!DOCTYPE html><html><head><title>Donate | MeowRescue</title></head>\
<body><div id=\"root\"><h1>Donate</h1></div></body></html>",
    );
}

#[test]
fn nav_without_anchors() {
    assert_repairs(
        "anchorless-nav",
        "/volunteer",
        "<body><nav><span>no links here</span></nav>\
<div id=\"root\"><h1>Volunteer</h1></div></body>",
    );
}

#[test]
fn preserves_existing_structured_data() {
    let input = r#"<body><div id="root"><h1>Whiskers</h1></div>
<script type="application/ld+json">{"@type":"Event","name":"Adoption Day"}</script></body>"#;
    let route = Route::new("/events/9").expect("route should parse");
    let fixed = fix(&route, input, &opts());
    assert!(fixed.contains(r#""name":"Adoption Day""#));
    assert!(validate(&fixed, SITE).is_valid());
}

#[test]
fn preserves_existing_hydration_state() {
    let input = "<body><div id=\"root\"><h1>Whiskers</h1></div>\
<script id=\"__MEOWSSG_STATE__\" type=\"application/json\">{\"route\":\"/cats/7\",\"queries\":{\"cat\":{\"id\":7}}}</script></body>";
    let route = Route::new("/cats/7").expect("route should parse");
    let fixed = fix(&route, input, &opts());
    assert!(fixed.contains("\"cat\":{\"id\":7}"));
    assert!(validate(&fixed, SITE).is_valid());
}
