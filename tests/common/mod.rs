#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the langstat binary.
#[macro_export]
macro_rules! langstat {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("langstat"))
    };
}

/// Minimal linguist-style taxonomy used by most tests.
pub const BASIC_TAXONOMY: &str = r##"
Python:
  type: programming
  color: "#3572A5"
  extensions:
  - ".py"
  - ".pyw"
Rust:
  type: programming
  color: "#dea584"
  extensions:
  - ".rs"
Go:
  type: programming
  color: "#00ADD8"
  extensions:
  - ".go"
Dockerfile:
  type: programming
  extensions:
  - ".dockerfile"
  filenames:
  - Dockerfile
"##;

/// The three-record history from the reference scenario.
pub const SCENARIO_HISTORY: &str = "10\t-\tREADME.md\n5\t-\t{old.txt => new.py}\n3\t-\tbuild\n";

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
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Writes `languages.yml` into the working directory.
    pub fn create_taxonomy(&self, content: &str) {
        self.create_file("languages.yml", content);
    }

    /// Creates a local `.langstat.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".langstat.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    /// A command running inside the fixture, isolated from the user's own
    /// config directory and environment.
    pub fn command(&self) -> assert_cmd::Command {
        let home = self.join(".home");
        let mut cmd = langstat!();
        cmd.current_dir(self.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("APPDATA", &home)
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR");
        cmd
    }
}
