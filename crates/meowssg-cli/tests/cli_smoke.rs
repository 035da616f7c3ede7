use serde_json::Value;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "meowssg-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_meowssg<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_meowssg");
    Command::new(bin)
        // Tests must not inherit a developer's backend credentials.
        .env_remove("MEOWSSG_SUPABASE_URL")
        .env_remove("MEOWSSG_SUPABASE_ANON_KEY")
        .env_remove("MEOWSSG_SITE_URL")
        .env_remove("MEOWSSG_OUT_DIR")
        .args(args)
        .output()
        .expect("meowssg command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn write_config(dir: &Path, out_dir: &Path) -> PathBuf {
    let config_path = dir.join("meowssg.toml");
    let config = format!(
        "site_url = \"https://meowrescue.org\"\nout_dir = {:?}\n",
        out_dir.display().to_string()
    );
    fs::write(&config_path, config).expect("config should be written");
    config_path
}

#[test]
fn routes_without_backend_are_static_only() {
    let tmp = TempDirGuard::new("routes");
    let config = write_config(tmp.path(), &tmp.path().join("dist"));

    let output = run_meowssg([
        OsString::from("routes"),
        OsString::from("--config"),
        config.as_os_str().to_os_string(),
        OsString::from("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["catCount"], 0);
    assert_eq!(payload["blogCount"], 0);
    assert_eq!(payload["eventCount"], 0);
    let routes = payload["routes"].as_array().expect("routes should be an array");
    assert!(routes.iter().any(|r| r == "/"));
    assert!(routes.iter().any(|r| r == "/cats"));
    assert!(routes.len() >= 15);
    assert_eq!(
        payload["warnings"]
            .as_array()
            .expect("warnings should be an array")
            .len(),
        1
    );
}

#[test]
fn validate_rejects_a_thin_document_and_reports_items() {
    let tmp = TempDirGuard::new("validate-fail");
    let page = tmp.path().join("thin.html");
    fs::write(&page, "<html><body><p>just a cat</p></body></html>")
        .expect("fixture should write");

    let output = run_meowssg([
        OsString::from("validate"),
        page.as_os_str().to_os_string(),
        OsString::from("--json"),
    ]);
    assert_failure(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["valid"], false);
    let missing = payload["missing"].as_array().expect("missing should be an array");
    assert!(missing.iter().any(|m| m == "doctype"));
    assert!(missing.iter().any(|m| m == "internal_links"));
    assert!(missing.iter().any(|m| m == "word_count"));
}

#[test]
fn fix_then_validate_round_trips() {
    let tmp = TempDirGuard::new("fix-roundtrip");
    let broken = tmp.path().join("broken.html");
    let repaired = tmp.path().join("repaired.html");
    fs::write(&broken, "<div id=\"root\"><p>adopt me</p></div>").expect("fixture should write");

    let fix_output = run_meowssg([
        OsString::from("fix"),
        broken.as_os_str().to_os_string(),
        OsString::from("--route"),
        OsString::from("/cats/7"),
        OsString::from("--output"),
        repaired.as_os_str().to_os_string(),
        OsString::from("--json"),
    ]);
    assert_success(&fix_output);
    let payload = parse_json_stdout(&fix_output);
    assert_eq!(payload["wasValid"], false);
    assert_eq!(payload["route"], "/cats/7");

    let validate_output = run_meowssg([
        OsString::from("validate"),
        repaired.as_os_str().to_os_string(),
        OsString::from("--json"),
    ]);
    assert_success(&validate_output);
    let payload = parse_json_stdout(&validate_output);
    assert_eq!(payload["valid"], true);
}

#[test]
fn fix_substitutes_the_fallback_title_for_home() {
    let tmp = TempDirGuard::new("fix-title");
    let broken = tmp.path().join("untitled.html");
    fs::write(&broken, "<div id=\"root\"><p>welcome</p></div>").expect("fixture should write");

    let output = run_meowssg([
        OsString::from("fix"),
        broken.as_os_str().to_os_string(),
        OsString::from("--route"),
        OsString::from("/"),
    ]);
    assert_success(&output);
    let html = String::from_utf8_lossy(&output.stdout).into_owned();
    assert!(html.contains("<title>MeowRescue - Cat Adoption &amp; Foster Care</title>"));
}

#[test]
fn build_without_backend_produces_the_full_output_tree() {
    let tmp = TempDirGuard::new("build");
    let out_dir = tmp.path().join("dist");
    let config = write_config(tmp.path(), &out_dir);

    let output = run_meowssg([
        OsString::from("build"),
        OsString::from("--config"),
        config.as_os_str().to_os_string(),
        OsString::from("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    let route_count = payload["routeCount"].as_u64().expect("routeCount should be a number");
    assert!(route_count >= 15);
    assert_eq!(payload["successCount"], route_count);
    assert_eq!(payload["errorCount"], 0);

    assert!(out_dir.join("index.html").exists());
    assert!(out_dir.join("cats/index.html").exists());
    assert!(out_dir.join("adopt/index.html").exists());
    assert!(out_dir.join("sitemap.xml").exists());
    assert!(out_dir.join("robots.txt").exists());
    assert!(out_dir.join("_redirects").exists());
    assert!(out_dir.join("assets/index.css").exists());

    let robots = fs::read_to_string(out_dir.join("robots.txt")).expect("robots should read");
    assert!(robots.contains("Sitemap: https://meowrescue.org/sitemap.xml"));

    let sitemap = fs::read_to_string(out_dir.join("sitemap.xml")).expect("sitemap should read");
    assert_eq!(sitemap.matches("<url>").count() as u64, route_count);
    assert!(sitemap.contains("<loc>https://meowrescue.org/</loc>"));

    // Every written page passes the checklist after repair and floors.
    let home = fs::read_to_string(out_dir.join("index.html")).expect("home should read");
    let validate_home = run_meowssg([
        OsString::from("validate"),
        out_dir.join("index.html").as_os_str().to_os_string(),
    ]);
    assert_success(&validate_home);
    assert!(home.contains("MeowRescue"));
}

#[test]
fn build_exits_zero_with_partial_success() {
    // A route the renderer has no page for is recorded, not fatal.
    let tmp = TempDirGuard::new("build-partial");
    let out_dir = tmp.path().join("dist");
    let config_path = tmp.path().join("meowssg.toml");
    fs::write(
        &config_path,
        format!(
            "site_url = \"https://meowrescue.org\"\nout_dir = {:?}\n\
static_routes = [\"/\", \"/adopt\", \"/no-such-page\"]\n",
            out_dir.display().to_string()
        ),
    )
    .expect("config should write");

    let output = run_meowssg([
        OsString::from("build"),
        OsString::from("--config"),
        config_path.as_os_str().to_os_string(),
        OsString::from("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["successCount"], 2);
    assert_eq!(payload["errorCount"], 1);
    assert_eq!(payload["failedRoutes"][0]["route"], "/no-such-page");
    assert!(!out_dir.join("no-such-page/index.html").exists());
}
