//! HTML validator: a fixed structural/SEO checklist over one rendered
//! document. Pure and deterministic for identical input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::dom;
use crate::fallback::{BRAND, HYDRATION_STATE_ID};

/// Minimum distinct internal links a page must carry.
pub const MIN_INTERNAL_LINKS: usize = 10;

/// Minimum visible words a page must carry.
pub const MIN_WORD_COUNT: usize = 300;

/// One required element of the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItem {
    Doctype,
    HtmlElement,
    HeadElement,
    BodyElement,
    RootMount,
    BundleScript,
    HydrationState,
    StylesheetLink,
    JsonLd,
    MetaDescription,
    CanonicalLink,
    FreshnessMeta,
    ResponsiveStyle,
    SitemapLink,
    HeaderElement,
    FooterElement,
    NavElement,
    BrandName,
    HeadingH1,
    HeadingH2,
    NavAnchor,
    FooterAnchor,
    InternalLinks,
    WordCount,
}

impl ChecklistItem {
    /// Stable name used in reports and logs.
    pub fn name(&self) -> &'static str {
        match self {
            ChecklistItem::Doctype => "doctype",
            ChecklistItem::HtmlElement => "html_element",
            ChecklistItem::HeadElement => "head_element",
            ChecklistItem::BodyElement => "body_element",
            ChecklistItem::RootMount => "root_mount",
            ChecklistItem::BundleScript => "bundle_script",
            ChecklistItem::HydrationState => "hydration_state",
            ChecklistItem::StylesheetLink => "stylesheet_link",
            ChecklistItem::JsonLd => "json_ld",
            ChecklistItem::MetaDescription => "meta_description",
            ChecklistItem::CanonicalLink => "canonical_link",
            ChecklistItem::FreshnessMeta => "freshness_meta",
            ChecklistItem::ResponsiveStyle => "responsive_style",
            ChecklistItem::SitemapLink => "sitemap_link",
            ChecklistItem::HeaderElement => "header_element",
            ChecklistItem::FooterElement => "footer_element",
            ChecklistItem::NavElement => "nav_element",
            ChecklistItem::BrandName => "brand_name",
            ChecklistItem::HeadingH1 => "heading_h1",
            ChecklistItem::HeadingH2 => "heading_h2",
            ChecklistItem::NavAnchor => "nav_anchor",
            ChecklistItem::FooterAnchor => "footer_anchor",
            ChecklistItem::InternalLinks => "internal_links",
            ChecklistItem::WordCount => "word_count",
        }
    }
}

/// Result of validating one document.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub missing: Vec<ChecklistItem>,
    pub word_count: usize,
    pub internal_link_count: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_names(&self) -> Vec<&'static str> {
        self.missing.iter().map(ChecklistItem::name).collect()
    }
}

/// Measured structural facts of one document, shared by the validator
/// and the output writer's floor enforcement.
#[derive(Debug, Clone)]
pub struct DocumentFacts {
    pub has_doctype: bool,
    pub has_html_tag: bool,
    pub has_head_tag: bool,
    pub has_body_tag: bool,
    pub has_root_mount: bool,
    pub has_bundle_script: bool,
    pub has_hydration_state: bool,
    pub has_stylesheet: bool,
    pub has_json_ld: bool,
    pub has_meta_description: bool,
    pub has_canonical: bool,
    pub has_freshness: bool,
    pub has_responsive: bool,
    pub has_sitemap_link: bool,
    pub has_header: bool,
    pub has_footer: bool,
    pub has_nav: bool,
    pub has_brand: bool,
    pub has_h1: bool,
    pub has_h2: bool,
    pub has_nav_anchor: bool,
    pub has_footer_anchor: bool,
    pub internal_link_count: usize,
    pub word_count: usize,
}

/// Gather every checklist fact in one parse of the document.
pub fn inspect(html: &str, site_url: &str) -> DocumentFacts {
    let dom = dom::parse(html);
    let doc = &dom.document;
    // The parser synthesizes html/head/body scaffolding for any input,
    // so those three are judged on the source text.
    let lower = html.to_ascii_lowercase();

    let metas = dom::find_all(doc, "meta");
    let links = dom::find_all(doc, "link");
    let scripts = dom::find_all(doc, "script");
    let styles = dom::find_all(doc, "style");
    let navs = dom::find_all(doc, "nav");
    let footers = dom::find_all(doc, "footer");

    let meta_attr = |name_value: &str, key: &str| -> bool {
        metas.iter().any(|m| {
            dom::attr(m, key).as_deref().map(str::to_ascii_lowercase)
                == Some(name_value.to_string())
        })
    };

    let has_meta_description = metas.iter().any(|m| {
        dom::attr(m, "name").as_deref() == Some("description")
            && dom::attr(m, "content").is_some_and(|c| !c.trim().is_empty())
    });
    let has_freshness = meta_attr("last-modified", "name")
        || meta_attr("last-modified", "http-equiv")
        || meta_attr("article:modified_time", "property")
        || meta_attr("og:updated_time", "property");
    let has_responsive = meta_attr("viewport", "name")
        || styles
            .iter()
            .any(|s| dom::text_raw(s).contains("@media"));

    let link_rel = |rel: &str| -> bool {
        links.iter().any(|l| {
            dom::attr(l, "rel")
                .map(|v| v.to_ascii_lowercase())
                .is_some_and(|v| v.split_whitespace().any(|part| part == rel))
        })
    };

    let body = dom::find_first(doc, "body");
    let body_text = body.as_ref().map(dom::text_content).unwrap_or_default();

    DocumentFacts {
        has_doctype: dom::has_doctype(&dom),
        has_html_tag: lower.contains("<html"),
        has_head_tag: lower.contains("<head"),
        has_body_tag: lower.contains("<body"),
        has_root_mount: dom::find_by_id(doc, "root").is_some(),
        has_bundle_script: scripts
            .iter()
            .any(|s| dom::attr(s, "src").is_some_and(|src| src.contains(".js"))),
        has_hydration_state: scripts
            .iter()
            .any(|s| dom::attr(s, "id").as_deref() == Some(HYDRATION_STATE_ID)),
        has_stylesheet: link_rel("stylesheet"),
        has_json_ld: scripts
            .iter()
            .any(|s| dom::attr(s, "type").as_deref() == Some("application/ld+json")),
        has_meta_description,
        has_canonical: link_rel("canonical"),
        has_freshness,
        has_responsive,
        has_sitemap_link: link_rel("sitemap"),
        has_header: dom::find_first(doc, "header").is_some(),
        has_footer: !footers.is_empty(),
        has_nav: !navs.is_empty(),
        has_brand: body_text.contains(BRAND),
        has_h1: dom::find_first(doc, "h1").is_some(),
        has_h2: dom::find_first(doc, "h2").is_some(),
        has_nav_anchor: navs.iter().any(|n| dom::find_first(n, "a").is_some()),
        has_footer_anchor: footers.iter().any(|f| dom::find_first(f, "a").is_some()),
        internal_link_count: internal_links(doc, site_url).len(),
        word_count: body_text.split_whitespace().count(),
    }
}

/// Distinct internal link targets: same-origin (root-relative or on the
/// configured origin), fragments stripped, pure-fragment links excluded.
pub fn internal_links(doc: &markup5ever_rcdom::Handle, site_url: &str) -> BTreeSet<String> {
    let origin = site_url.trim_end_matches('/');
    let mut targets = BTreeSet::new();
    for anchor in dom::find_all(doc, "a") {
        let Some(href) = dom::attr(&anchor, "href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            continue;
        }
        let path = if href.starts_with("//") {
            continue;
        } else if let Some(rest) = href
            .strip_prefix(origin)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        {
            if rest.is_empty() { "/" } else { rest }
        } else if href.starts_with('/') {
            href
        } else {
            continue;
        };
        let without_fragment = path.split('#').next().unwrap_or(path);
        if without_fragment.is_empty() {
            continue;
        }
        targets.insert(without_fragment.to_string());
    }
    targets
}

/// Run the full checklist over one HTML string.
pub fn validate(html: &str, site_url: &str) -> ValidationReport {
    let facts = inspect(html, site_url);
    report_from_facts(&facts)
}

/// Evaluate the checklist against already-measured facts.
pub fn report_from_facts(facts: &DocumentFacts) -> ValidationReport {
    let checks = [
        (ChecklistItem::Doctype, facts.has_doctype),
        (ChecklistItem::HtmlElement, facts.has_html_tag),
        (ChecklistItem::HeadElement, facts.has_head_tag),
        (ChecklistItem::BodyElement, facts.has_body_tag),
        (ChecklistItem::RootMount, facts.has_root_mount),
        (ChecklistItem::BundleScript, facts.has_bundle_script),
        (ChecklistItem::HydrationState, facts.has_hydration_state),
        (ChecklistItem::StylesheetLink, facts.has_stylesheet),
        (ChecklistItem::JsonLd, facts.has_json_ld),
        (ChecklistItem::MetaDescription, facts.has_meta_description),
        (ChecklistItem::CanonicalLink, facts.has_canonical),
        (ChecklistItem::FreshnessMeta, facts.has_freshness),
        (ChecklistItem::ResponsiveStyle, facts.has_responsive),
        (ChecklistItem::SitemapLink, facts.has_sitemap_link),
        (ChecklistItem::HeaderElement, facts.has_header),
        (ChecklistItem::FooterElement, facts.has_footer),
        (ChecklistItem::NavElement, facts.has_nav),
        (ChecklistItem::BrandName, facts.has_brand),
        (ChecklistItem::HeadingH1, facts.has_h1),
        (ChecklistItem::HeadingH2, facts.has_h2),
        (ChecklistItem::NavAnchor, facts.has_nav_anchor),
        (ChecklistItem::FooterAnchor, facts.has_footer_anchor),
        (
            ChecklistItem::InternalLinks,
            facts.internal_link_count >= MIN_INTERNAL_LINKS,
        ),
        (ChecklistItem::WordCount, facts.word_count >= MIN_WORD_COUNT),
    ];

    ValidationReport {
        missing: checks
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(item, _)| *item)
            .collect(),
        word_count: facts.word_count,
        internal_link_count: facts.internal_link_count,
    }
}
