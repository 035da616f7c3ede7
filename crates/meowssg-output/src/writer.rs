//! Per-route file writes with structural floor enforcement.

use meowssg_kernel::fallback::hidden_fallback_block;
use meowssg_kernel::route::Route;
use meowssg_kernel::validate::{MIN_INTERNAL_LINKS, MIN_WORD_COUNT, inspect};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::OutputError;

/// What finalization did to a document before writing it.
#[derive(Debug, Clone, Default)]
pub struct FinalizeOutcome {
    pub injected_links: bool,
    pub injected_words: bool,
    pub patched_head: Vec<&'static str>,
}

impl FinalizeOutcome {
    pub fn touched(&self) -> bool {
        self.injected_links || self.injected_words || !self.patched_head.is_empty()
    }
}

/// Writes finalized documents under one output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    out_dir: PathBuf,
    site_url: String,
    build_date: String,
}

impl OutputWriter {
    pub fn new(
        out_dir: impl Into<PathBuf>,
        site_url: impl Into<String>,
        build_date: impl Into<String>,
    ) -> Result<Self, OutputError> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).map_err(|e| OutputError::io(&out_dir, e))?;
        Ok(Self {
            out_dir,
            site_url: site_url.into(),
            build_date: build_date.into(),
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn build_date(&self) -> &str {
        &self.build_date
    }

    /// Remove any previous build output and recreate the directory.
    pub fn clean(&self) -> Result<(), OutputError> {
        if self.out_dir.exists() {
            fs::remove_dir_all(&self.out_dir).map_err(|e| OutputError::io(&self.out_dir, e))?;
        }
        fs::create_dir_all(&self.out_dir).map_err(|e| OutputError::io(&self.out_dir, e))
    }

    /// Enforce the link/word floors and the always-present head tags on
    /// a final document.
    pub fn finalize(&self, route: &Route, html: &str) -> (String, FinalizeOutcome) {
        let facts = inspect(html, &self.site_url);
        let mut outcome = FinalizeOutcome::default();
        let mut html = html.to_string();

        let mut head_extra = String::new();
        if !facts.has_sitemap_link {
            head_extra
                .push_str("<link rel=\"sitemap\" type=\"application/xml\" href=\"/sitemap.xml\">");
            outcome.patched_head.push("sitemap_link");
        }
        if !facts.has_canonical {
            head_extra.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">",
                route.canonical_url(&self.site_url)
            ));
            outcome.patched_head.push("canonical_link");
        }
        if !facts.has_freshness {
            head_extra.push_str(&format!(
                "<meta name=\"last-modified\" content=\"{}\">",
                self.build_date
            ));
            outcome.patched_head.push("freshness_meta");
        }
        if !head_extra.is_empty() {
            html = insert_before(&html, "</head>", &head_extra);
        }

        outcome.injected_links = facts.internal_link_count < MIN_INTERNAL_LINKS;
        outcome.injected_words = facts.word_count < MIN_WORD_COUNT;
        if outcome.injected_links || outcome.injected_words {
            let block = hidden_fallback_block(outcome.injected_words);
            html = insert_before(&html, "</body>", &block);
        }

        (html, outcome)
    }

    /// Finalize and persist one document at its route's output path.
    pub fn write_route(
        &self,
        route: &Route,
        html: &str,
    ) -> Result<(PathBuf, FinalizeOutcome), OutputError> {
        let (finalized, outcome) = self.finalize(route, html);
        let path = self.out_dir.join(route.output_rel_path());
        write_atomic(&path, finalized.as_bytes())?;
        Ok((path, outcome))
    }

    /// Persist a non-route artifact (sitemap, robots, redirects) at a
    /// path relative to the output directory.
    pub fn write_artifact(&self, rel_path: &str, contents: &str) -> Result<PathBuf, OutputError> {
        let path = self.out_dir.join(rel_path);
        write_atomic(&path, contents.as_bytes())?;
        Ok(path)
    }
}

/// Insert `snippet` before the last occurrence of `marker`, or append
/// when the marker is absent.
fn insert_before(html: &str, marker: &str, snippet: &str) -> String {
    match html.rfind(marker) {
        Some(idx) => {
            let mut out = String::with_capacity(html.len() + snippet.len());
            out.push_str(&html[..idx]);
            out.push_str(snippet);
            out.push_str(&html[idx..]);
            out
        }
        None => {
            let mut out = html.to_string();
            out.push_str(snippet);
            out
        }
    }
}

/// Write through a temp file and rename into place, so a crashed build
/// never leaves a half-written page in the output tree.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
    }

    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> Result<(), OutputError> {
        let mut file = File::create(&tmp_path).map_err(|e| OutputError::io(&tmp_path, e))?;
        file.write_all(contents)
            .map_err(|e| OutputError::io(&tmp_path, e))?;
        file.sync_all().map_err(|e| OutputError::io(&tmp_path, e))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        OutputError::io(path, e)
    })
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}
