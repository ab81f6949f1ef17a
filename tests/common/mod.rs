#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the code-tally binary.
///
/// `CODE_TALLY_ROOT` is removed and `HOME`/`XDG_CONFIG_HOME` point at an empty
/// location, so neither the host root nor a user config file affects results.
#[macro_export]
macro_rules! code_tally {
    () => {{
        let home = $crate::common::isolated_home();
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("code-tally"));
        cmd.env_remove("CODE_TALLY_ROOT")
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"));
        cmd
    }};
}

/// Directory used as `HOME` by every spawned command. Never contains a config.
pub fn isolated_home() -> PathBuf {
    std::env::temp_dir().join("code-tally-tests-home")
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes, for content that is not valid UTF-8.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the local config file picked up from the working directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".code-tally.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small module with one declaration, one const arrow, and one method.
pub const SAMPLE_TS: &str = "\
export function greet(name) {
  return `hi ${name}`;
}

const double = (x) => x * 2;

class Box {
  open() {
    return true;
  }
}
";

/// Three lines, no matches.
pub const PLAIN_JS: &str = "let a = 1;\nlet b = 2;\nlet c = a + b;\n";

/// Config that only counts `.mjs` files and additionally skips `fixtures` directories.
pub const MJS_ONLY_CONFIG: &str = r#"
[scanner]
exclude_dirs = ["node_modules", "fixtures"]

[content]
extensions = ["mjs"]
"#;
