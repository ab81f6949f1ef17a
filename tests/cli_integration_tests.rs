mod common;

use common::{MJS_ONLY_CONFIG, PLAIN_JS, SAMPLE_TS, TestFixture};
use predicates::prelude::*;

// ============================================================================
// Argument handling
// ============================================================================

#[test]
fn help_lists_options() {
    code_tally!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exclude-dir"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn unknown_format_is_usage_error() {
    let fixture = TestFixture::new();

    code_tally!()
        .arg(fixture.path())
        .args(["--format", "xml", "--no-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn missing_root_exits_with_error() {
    let fixture = TestFixture::new();
    let missing = fixture.path().join("does-not-exist");

    code_tally!()
        .arg(&missing)
        .arg("--no-config")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("✖ Scan: Cannot scan"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn file_as_root_exits_with_error() {
    let fixture = TestFixture::new();
    fixture.create_file("app.ts", PLAIN_JS);

    code_tally!()
        .arg(fixture.path().join("app.ts"))
        .arg("--no-config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn root_from_environment() {
    let fixture = TestFixture::new();
    fixture.create_file("app.js", PLAIN_JS);

    code_tally!()
        .env("CODE_TALLY_ROOT", fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("app.js: 3 lines, 0 functions"));
}

#[test]
fn root_defaults_to_current_directory() {
    let fixture = TestFixture::new();
    fixture.create_file("index.tsx", SAMPLE_TS);

    code_tally!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing ....\n"))
        .stdout(predicate::str::contains("index.tsx: 11 lines, 3 functions"));
}

// ============================================================================
// Filtering overrides
// ============================================================================

#[test]
fn ext_flag_replaces_default_extensions() {
    let fixture = TestFixture::new();
    fixture.create_file("a.mjs", PLAIN_JS);
    fixture.create_file("b.ts", PLAIN_JS);

    code_tally!()
        .arg(fixture.path())
        .args(["--ext", ".mjs", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.mjs: 3 lines"))
        .stdout(predicate::str::contains("b.ts").not())
        .stdout(predicate::str::contains("Total files: 1"));
}

#[test]
fn empty_ext_flag_is_config_error() {
    let fixture = TestFixture::new();

    code_tally!()
        .arg(fixture.path())
        .args(["--ext", "", "--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ Config"));
}

#[test]
fn exclude_dir_flag_adds_to_defaults() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.ts", PLAIN_JS);
    fixture.create_file("vendor/lib.js", PLAIN_JS);
    fixture.create_file("node_modules/pkg/index.js", PLAIN_JS);

    code_tally!()
        .arg(fixture.path())
        .args(["--exclude-dir", "vendor", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/app.ts"))
        .stdout(predicate::str::contains("vendor").not())
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains("Total files: 1"));
}

#[test]
fn exclude_glob_skips_matching_files() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.ts", PLAIN_JS);
    fixture.create_file("src/app.min.js", PLAIN_JS);
    fixture.create_file("gen/schema.ts", PLAIN_JS);

    code_tally!()
        .arg(fixture.path())
        .args(["-x", "**/*.min.js", "-x", "gen/**", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/app.ts"))
        .stdout(predicate::str::contains("app.min.js").not())
        .stdout(predicate::str::contains("schema.ts").not());
}

#[test]
fn invalid_exclude_glob_is_reported() {
    let fixture = TestFixture::new();

    code_tally!()
        .arg(fixture.path())
        .args(["-x", "src/[", "--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ Pattern: Invalid glob pattern"));
}

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn local_config_is_loaded_from_working_directory() {
    let fixture = TestFixture::new();
    fixture.create_config(MJS_ONLY_CONFIG);
    fixture.create_file("a.mjs", PLAIN_JS);
    fixture.create_file("b.ts", PLAIN_JS);
    fixture.create_file("fixtures/c.mjs", PLAIN_JS);

    code_tally!()
        .current_dir(fixture.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.mjs: 3 lines"))
        .stdout(predicate::str::contains("b.ts").not())
        .stdout(predicate::str::contains("fixtures").not())
        .stdout(predicate::str::contains("Total files: 1"));
}

#[test]
fn no_config_ignores_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config(MJS_ONLY_CONFIG);
    fixture.create_file("a.mjs", PLAIN_JS);
    fixture.create_file("b.ts", PLAIN_JS);

    code_tally!()
        .current_dir(fixture.path())
        .args([".", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b.ts: 3 lines"))
        .stdout(predicate::str::contains("a.mjs").not());
}

#[test]
fn explicit_config_path_is_used() {
    let fixture = TestFixture::new();
    fixture.create_file("settings/tally.toml", MJS_ONLY_CONFIG);
    fixture.create_file("project/a.mjs", PLAIN_JS);
    fixture.create_file("project/b.js", PLAIN_JS);

    code_tally!()
        .arg(fixture.path().join("project"))
        .arg("--config")
        .arg(fixture.path().join("settings/tally.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("a.mjs"))
        .stdout(predicate::str::contains("b.js").not());
}

#[test]
fn verbose_reports_config_source() {
    let fixture = TestFixture::new();
    fixture.create_config(MJS_ONLY_CONFIG);

    code_tally!()
        .current_dir(fixture.path())
        .args([".", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using config:"))
        .stderr(predicate::str::contains(".code-tally.toml"));
}

#[test]
fn unknown_config_key_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_config("[content]\nmax_lines = 10\n");

    code_tally!()
        .current_dir(fixture.path())
        .arg(".")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ Config: TOML parse error"))
        .stderr(predicate::str::contains("--no-config"));
}

#[test]
fn missing_explicit_config_is_error() {
    let fixture = TestFixture::new();

    code_tally!()
        .arg(fixture.path())
        .arg("--config")
        .arg(fixture.path().join("absent.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn user_config_is_not_read_from_host_home() {
    let fixture = TestFixture::new();
    fixture.create_file("project/a.mjs", PLAIN_JS);
    fixture.create_file("project/b.ts", PLAIN_JS);

    code_tally!()
        .current_dir(fixture.path())
        .args(["project", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b.ts: 3 lines"))
        .stderr(predicate::str::contains("Using config:").not());
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_is_loaded_from_config_home() {
    let fixture = TestFixture::new();
    fixture.create_file("xdg/code-tally/config.toml", MJS_ONLY_CONFIG);
    fixture.create_file("project/a.mjs", PLAIN_JS);
    fixture.create_file("project/b.ts", PLAIN_JS);

    code_tally!()
        .env("XDG_CONFIG_HOME", fixture.path().join("xdg"))
        .current_dir(fixture.path())
        .args(["project", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.mjs: 3 lines"))
        .stdout(predicate::str::contains("b.ts").not())
        .stderr(predicate::str::contains("config.toml"));
}
