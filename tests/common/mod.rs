//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated config directory for one test
///
/// Every command runs with `MEALPREP_CONFIG_DIR` pointing here, so the
/// developer's own settings never leak into a test.
pub struct TestKitchen {
    /// Temporary config directory
    pub dir: TempDir,
}

impl TestKitchen {
    /// Create an empty config directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the config directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write `config.toml` into the config directory
    #[allow(dead_code)]
    pub fn write_settings(&self, content: &str) {
        std::fs::write(self.dir.path().join("config.toml"), content)
            .expect("Failed to write settings");
    }

    /// Write a file at an arbitrary name inside the directory
    #[allow(dead_code)]
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Run mealprep with the given arguments
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mealprep"));
        cmd.current_dir(self.path());
        cmd.env("MEALPREP_CONFIG_DIR", self.path());
        cmd.env_remove("MEALPREP_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd.output().expect("Failed to execute mealprep")
    }

    /// Run mealprep with `--json` and parse stdout
    #[allow(dead_code)]
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full: Vec<&str> = args.to_vec();
        full.push("--json");
        let output = self.run(&full);
        assert!(
            output.status.success(),
            "mealprep {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
    }
}

impl Default for TestKitchen {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample settings with one strict and one permissive menu
#[allow(dead_code)]
pub const SAMPLE_SETTINGS: &str = r#"
[[menus]]
name = "seaside"
policy = "strict"
starter = "SOUP"
main = "FISH"
dessert = "ICE_CREAM"
drink = "FRUIT_JUICE"

[[menus]]
name = "diner"
policy = "permissive"
starter = "CHICKEN_WINGS"
main = "PIZZA"
dessert = "CHEESECAKE"
drink = "SODA"
"#;
