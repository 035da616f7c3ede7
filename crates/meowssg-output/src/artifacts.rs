//! Build-wide artifacts: sitemap, robots, redirects, placeholder
//! assets, and the end-of-build index verification.

use meowssg_kernel::escape;
use meowssg_kernel::fix::{FixOptions, fix};
use meowssg_kernel::route::Route;
use meowssg_kernel::validate::validate;
use std::fs;

use crate::writer::{OutputWriter, write_atomic};
use crate::OutputError;

/// Render the sitemap for the resolved route set: one `<url>` entry per
/// route with loc/lastmod/changefreq/priority by route kind.
pub fn sitemap_xml(writer: &OutputWriter, routes: &[Route]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in routes {
        let kind = route.kind();
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
<changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape::text(&route.canonical_url(writer.site_url())),
            writer.build_date(),
            kind.changefreq(),
            kind.priority(),
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Write `sitemap.xml` for the resolved route set.
pub fn write_sitemap(writer: &OutputWriter, routes: &[Route]) -> Result<(), OutputError> {
    let xml = sitemap_xml(writer, routes);
    writer.write_artifact("sitemap.xml", &xml)?;
    Ok(())
}

/// Ensure `robots.txt` exists and references the sitemap, appending the
/// reference to an existing file rather than replacing it.
pub fn ensure_robots(writer: &OutputWriter) -> Result<(), OutputError> {
    let path = writer.out_dir().join("robots.txt");
    let sitemap_line = format!(
        "Sitemap: {}/sitemap.xml",
        writer.site_url().trim_end_matches('/')
    );

    let contents = match fs::read_to_string(&path) {
        Ok(existing) if existing.lines().any(|l| l.trim_start().starts_with("Sitemap:")) => {
            return Ok(());
        }
        Ok(existing) => {
            let mut patched = existing;
            if !patched.ends_with('\n') {
                patched.push('\n');
            }
            patched.push('\n');
            patched.push_str(&sitemap_line);
            patched.push('\n');
            patched
        }
        Err(_) => format!("User-agent: *\nAllow: /\n\n{sitemap_line}\n"),
    };
    write_atomic(&path, contents.as_bytes())
}

/// Write the SPA fallback rule for the hosting layer.
pub fn write_redirects(writer: &OutputWriter) -> Result<(), OutputError> {
    writer.write_artifact("_redirects", "/*    /index.html    200\n")?;
    Ok(())
}

/// Guarantee the assets directory exists with at least a stylesheet and
/// the client bundle entry point, writing placeholders when the real
/// bundler output is absent.
pub fn ensure_assets(writer: &OutputWriter) -> Result<(), OutputError> {
    let assets = writer.out_dir().join("assets");
    fs::create_dir_all(&assets).map_err(|e| OutputError::io(&assets, e))?;

    let has_css = fs::read_dir(&assets)
        .map_err(|e| OutputError::io(&assets, e))?
        .flatten()
        .any(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
        });
    if !has_css {
        write_atomic(
            &assets.join("index.css"),
            b"/* placeholder stylesheet; replaced by the bundler output */\n\
body{font-family:system-ui,sans-serif;margin:0}\n\
@media (max-width: 640px){body{font-size:15px}}\n",
        )?;
    }

    let bundle = assets.join("index.js");
    if !bundle.exists() {
        write_atomic(
            &bundle,
            b"// placeholder bundle; replaced by the bundler output\n",
        )?;
    }
    Ok(())
}

/// Verify the root `index.html` exists and passes the checklist,
/// regenerating it from the fallback template otherwise. Returns true
/// when a regeneration happened.
pub fn verify_index(writer: &OutputWriter) -> Result<bool, OutputError> {
    let path = writer.out_dir().join("index.html");
    let existing = fs::read_to_string(&path).unwrap_or_default();
    if !existing.is_empty() && validate(&existing, writer.site_url()).is_valid() {
        return Ok(false);
    }

    let home = Route::new("/").expect("root route is always valid");
    let opts = FixOptions {
        site_url: writer.site_url().to_string(),
        last_modified: writer.build_date().to_string(),
    };
    let regenerated = fix(&home, &existing, &opts);
    write_atomic(&path, regenerated.as_bytes())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_writer(prefix: &str) -> (OutputWriter, PathBuf) {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "meowssg-artifacts-{prefix}-{}-{unique}",
            std::process::id()
        ));
        let writer = OutputWriter::new(&dir, "https://meowrescue.org", "2026-08-07")
            .expect("writer should create its directory");
        (writer, dir)
    }

    fn routes(paths: &[&str]) -> Vec<Route> {
        paths
            .iter()
            .map(|p| Route::new(p).expect("test route should parse"))
            .collect()
    }

    #[test]
    fn sitemap_has_one_entry_per_route() {
        let (writer, dir) = temp_writer("sitemap");
        let routes = routes(&["/", "/cats", "/cats/7", "/blog/hello", "/about"]);
        let xml = sitemap_xml(&writer, &routes);

        assert_eq!(xml.matches("<url>").count(), routes.len());
        assert!(xml.contains("<loc>https://meowrescue.org/</loc>"));
        assert!(xml.contains("<loc>https://meowrescue.org/cats/7</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<lastmod>2026-08-07</lastmod>"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn robots_is_created_with_the_sitemap_line() {
        let (writer, dir) = temp_writer("robots-new");
        ensure_robots(&writer).expect("robots should write");
        let contents =
            fs::read_to_string(dir.join("robots.txt")).expect("robots.txt should exist");
        assert!(contents.contains("Sitemap: https://meowrescue.org/sitemap.xml"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn robots_sitemap_line_is_appended_not_replaced() {
        let (writer, dir) = temp_writer("robots-append");
        fs::write(
            dir.join("robots.txt"),
            "User-agent: *\nDisallow: /admin\n",
        )
        .expect("seed robots should write");

        ensure_robots(&writer).expect("robots should patch");
        let contents =
            fs::read_to_string(dir.join("robots.txt")).expect("robots.txt should exist");
        assert!(contents.contains("Disallow: /admin"));
        assert!(contents.contains("Sitemap: https://meowrescue.org/sitemap.xml"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_index_is_regenerated_valid() {
        let (writer, dir) = temp_writer("index");
        let regenerated = verify_index(&writer).expect("verification should run");
        assert!(regenerated);

        let contents =
            fs::read_to_string(dir.join("index.html")).expect("index.html should exist");
        assert!(validate(&contents, "https://meowrescue.org").is_valid());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn assets_placeholders_do_not_clobber_real_files() {
        let (writer, dir) = temp_writer("assets");
        fs::create_dir_all(dir.join("assets")).expect("assets dir should create");
        fs::write(dir.join("assets/site.css"), "body{}").expect("css should write");

        ensure_assets(&writer).expect("assets should ensure");
        assert!(!dir.join("assets/index.css").exists());
        assert!(dir.join("assets/index.js").exists());

        let _ = fs::remove_dir_all(dir);
    }
}
