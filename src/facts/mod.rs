//! Build-facts providers.
//!
//! The formatter's default payload fields are sourced from a
//! [`BuildFacts`] collaborator. The production implementation
//! ([`PipelineFacts`]) reads CI environment variables and falls back to
//! `git` subprocess lookups; tests substitute a stub.

mod pipeline;

#[cfg(test)]
mod pipeline_tests;

pub use pipeline::PipelineFacts;

/// Read-only lookups of build facts for attachment fields.
///
/// Every lookup is best-effort: an unavailable fact returns `None` and
/// its attachment field is skipped. Implementations must not fail.
pub trait BuildFacts {
    /// The name of the currently running pipeline lane/step.
    fn lane(&self) -> Option<String>;

    /// The current git branch name.
    fn git_branch(&self) -> Option<String>;

    /// The author of the last git commit.
    fn git_author(&self) -> Option<String>;

    /// The subject line of the last git commit.
    fn last_commit_subject(&self) -> Option<String>;

    /// The abbreviated hash of the last git commit.
    fn last_commit_hash(&self) -> Option<String>;
}
