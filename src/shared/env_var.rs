//! Centralized reader for the GitHub Actions runner environment.
//!
//! Variable names are private constants here; other code reads values
//! through the `EnvVars` struct.

const GITHUB_ACTIONS: &str = "GITHUB_ACTIONS";

/// Snapshot of the runner environment at load time.
pub struct EnvVars {
    /// Set to "true" by the Actions runner for every step.
    pub github_actions: bool,
}

impl EnvVars {
    pub fn load() -> Self {
        Self {
            github_actions: std::env::var(GITHUB_ACTIONS).is_ok_and(|v| v == "true"),
        }
    }
}

/// Format a failure the way the runner expects it on stdout.
///
/// `%`, `\r` and `\n` are escaped per the workflow command syntax so that
/// multi-line messages stay in one annotation.
pub fn workflow_error(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}
