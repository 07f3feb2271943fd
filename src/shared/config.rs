use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level configuration for task-action.
#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Code-generation CLI settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Branch settings for runs that start a new branch.
    #[serde(default)]
    pub branch: BranchConfig,
}

/// Code-generation CLI configuration.
#[derive(Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Command prefix used to invoke the CLI (default: ["npx", "@polka-codes/cli@latest"]).
    /// The task description, `commit` or `pr` is appended as the last argument.
    #[serde(default = "default_agent_command")]
    #[schemars(default = "default_agent_command")]
    pub command: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            command: default_agent_command(),
        }
    }
}

/// Branch configuration.
#[derive(Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BranchConfig {
    /// Prefix for new branches, followed by a millisecond timestamp (default: "polka/task-").
    #[serde(default = "default_branch_prefix")]
    #[schemars(default = "default_branch_prefix")]
    pub prefix: String,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            prefix: default_branch_prefix(),
        }
    }
}

fn default_agent_command() -> Vec<String> {
    vec!["npx".to_string(), "@polka-codes/cli@latest".to_string()]
}

fn default_branch_prefix() -> String {
    "polka/task-".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Directory holding the config file: `$XDG_CONFIG_HOME/task-action`, else
/// `$HOME/.config/task-action`. Empty variables count as unset.
fn config_dir() -> Option<PathBuf> {
    let non_empty = |key: &str| std::env::var_os(key).filter(|v| !v.is_empty());
    non_empty("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| non_empty("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|base| base.join("task-action"))
}

/// Load configuration from the config directory (config.yaml or config.yml).
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    match config_dir() {
        Some(dir) => load_config_from_dir(&dir),
        None => Ok(Config::default()),
    }
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
/// Returns Config::default() if neither file exists.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "Loading config");
                return parse_config(&content, &path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

/// Parse YAML content into Config.
fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
