//! Git repository initialization for generated projects.
//! Shells out to the system `git`: init, stage everything, one fixed
//! initial commit. Any failing step aborts; completed steps are not rolled
//! back.

use crate::constants::INITIAL_COMMIT_MESSAGE;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::GitError(format!("failed to run git {}: {}", args.join(" "), e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitError(format!(
            "git {} failed with status {}: {}",
            args.join(" "),
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Initializes a repository in `path` and records the initial commit.
pub fn init_git_repo(path: &Path) -> Result<()> {
    run_git(path, &["init"])?;
    run_git(path, &["add", "."])?;
    run_git(path, &["commit", "-m", INITIAL_COMMIT_MESSAGE])?;
    Ok(())
}
