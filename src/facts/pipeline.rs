//! Production build-facts provider.

use std::process::Command;

use super::BuildFacts;

/// Build facts sourced from the caller, CI environment variables, and
/// the local git repository.
///
/// The lane name is supplied by the caller (typically from configuration).
/// Git facts prefer CI-provided environment variables where they exist
/// and otherwise shell out to `git`; any failure degrades to `None`.
#[derive(Debug, Default, Clone)]
pub struct PipelineFacts {
    lane: Option<String>,
}

impl PipelineFacts {
    /// Creates a provider with the given lane name.
    #[must_use]
    pub const fn new(lane: Option<String>) -> Self {
        Self { lane }
    }
}

impl BuildFacts for PipelineFacts {
    fn lane(&self) -> Option<String> {
        self.lane.clone()
    }

    fn git_branch(&self) -> Option<String> {
        // Jenkins and most CI systems export one of these; detached HEAD
        // checkouts make the git lookup useless there.
        env_var("GIT_BRANCH")
            .or_else(|| env_var("BRANCH_NAME"))
            .or_else(|| git_output(&["rev-parse", "--abbrev-ref", "HEAD"]))
    }

    fn git_author(&self) -> Option<String> {
        git_output(&["log", "-1", "--pretty=%an"])
    }

    fn last_commit_subject(&self) -> Option<String> {
        git_output(&["log", "-1", "--pretty=%s"])
    }

    fn last_commit_hash(&self) -> Option<String> {
        git_output(&["rev-parse", "--short", "HEAD"])
    }
}

/// Reads a non-empty environment variable.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Runs `git` with the given arguments and returns its trimmed stdout.
///
/// Returns `None` when git is missing, the command fails, or the output
/// is empty (e.g. outside a repository).
fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
