use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::error::{Result, RunError};
use super::plan::Step;

/// Executes planned steps.
///
/// This abstraction lets the orchestration be tested without spawning git
/// or the code-generation CLI.
pub trait CommandRunner {
    fn run(&self, step: &Step) -> Result<()>;
}

/// Runs each step as a child process with inherited stdio.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, step: &Step) -> Result<()> {
        let search_path = std::env::var_os("PATH");
        let Some(program) = resolve_program(&step.program, search_path.as_deref()) else {
            return Err(RunError::CommandFailed {
                command: step.to_string(),
                reason: format!("{} not found in PATH", step.program),
            });
        };
        tracing::debug!(program = %program.display(), "Spawning step");

        let status = Command::new(&program)
            .args(&step.args)
            .status()
            .map_err(|e| RunError::CommandFailed {
                command: step.to_string(),
                reason: format!("failed to spawn: {e}"),
            })?;

        if !status.success() {
            return Err(RunError::CommandFailed {
                command: step.to_string(),
                reason: format!("exited with {status}"),
            });
        }
        Ok(())
    }
}

/// Locate an executable. Names containing a path separator are taken as-is,
/// bare names are searched for in `search_path` (a `PATH`-style list).
/// Non-executable files never match, so they cannot shadow a later entry.
fn resolve_program(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }
    std::env::split_paths(search_path?)
        .map(|dir| dir.join(program))
        .find(|full| is_executable(full))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.is_file()
        && path
            .metadata()
            .is_ok_and(|m| m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
