// Configuration file handling

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,

    /// Tag key to label name table, e.g. `severity = "severity"`.
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory the report archive is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Suite name stamped into every test case
    #[serde(default)]
    pub suite: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            suite: String::new(),
        }
    }
}

pub fn default_output_dir() -> String {
    String::from("allure-results")
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .allurebddrc (current directory)
        // 2. ~/.allurebddrc (home directory)
        // 3. .allurebddrc.toml (current directory)
        // 4. ~/.allurebddrc.toml (home directory)

        let cwd = std::env::current_dir().ok()?;
        let home = dirs::home_dir()?;

        let paths = [
            cwd.join(".allurebddrc"),
            home.join(".allurebddrc"),
            cwd.join(".allurebddrc.toml"),
            home.join(".allurebddrc.toml"),
        ];

        for path in &paths {
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Generate default configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}
