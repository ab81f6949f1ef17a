use std::path::Path;

use super::*;

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn filter_by_extension() {
    let filter = SourceFilter::new(&exts(&["ts"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("src/main.ts")));
    assert!(!filter.should_include(Path::new("src/main.py")));
}

#[test]
fn filter_multiple_extensions() {
    let filter = SourceFilter::new(&exts(&["ts", "tsx", "js", "jsx"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("app.tsx")));
    assert!(filter.should_include(Path::new("lib/util.js")));
    assert!(filter.should_include(Path::new("view.jsx")));
    assert!(!filter.should_include(Path::new("styles.css")));
    assert!(!filter.should_include(Path::new("data.json")));
}

#[test]
fn filter_accepts_leading_dot_in_extension() {
    let filter = SourceFilter::new(&exts(&[".ts"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("main.ts")));
}

#[test]
fn filter_matches_name_suffix() {
    let filter = SourceFilter::new(&exts(&["ts"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("types/index.d.ts")));
    assert!(filter.should_include(Path::new(".ts")));
    assert!(!filter.should_include(Path::new("main.tsx")));
    assert!(!filter.should_include(Path::new("ts")));
}

#[test]
fn filter_rejects_file_without_extension() {
    let filter = SourceFilter::new(&exts(&["js"]), &[]).unwrap();

    assert!(!filter.should_include(Path::new("Makefile")));
    assert!(!filter.should_include(Path::new("Dockerfile")));
}

#[test]
fn filter_empty_extensions_rejects_all() {
    let filter = SourceFilter::new(&[], &[]).unwrap();

    assert!(!filter.should_include(Path::new("main.ts")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = SourceFilter::new(
        &exts(&["js"]),
        &["**/*.min.js".to_string(), "vendor/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/app.js")));
    assert!(!filter.should_include(Path::new("src/app.min.js")));
    assert!(!filter.should_include(Path::new("vendor/lib/jquery.js")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = SourceFilter::new(&exts(&["ts"]), &["[invalid".to_string()]);
    assert!(matches!(result, Err(TallyError::InvalidPattern { .. })));
}
