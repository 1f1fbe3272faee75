//! Version-control collaborator: diff acquisition.
//!
//! The pipeline treats this module as an opaque string provider; repository
//! state is not validated here beyond git's own exit codes.

use std::process::Command;

use crate::error::{Result, ScribeError};

fn run_git(args: &[&str], dir: &str) -> Result<String> {
   let output = Command::new("git")
      .args(args)
      .current_dir(dir)
      .output()
      .map_err(|e| ScribeError::GitError(format!("Failed to run git {}: {e}", args.join(" "))))?;

   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ScribeError::GitError(format!(
         "git {} failed: {}",
         args.join(" "),
         stderr.trim()
      )));
   }

   Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Diff of staged changes (`git diff --cached`).
pub fn get_staged_diff(dir: &str) -> Result<String> {
   run_git(&["diff", "--cached"], dir)
}

/// Diff of a single commit (`git show --format= <target>`); message excluded
/// so only the patch reaches the classifier.
pub fn get_commit_diff(target: &str, dir: &str) -> Result<String> {
   run_git(&["show", "--format=", target], dir)
}

/// Diff of a custom range. Accepts both `HEAD~2..HEAD` and the
/// space-separated `HEAD~2 HEAD` form.
pub fn get_range_diff(range: &str, dir: &str) -> Result<String> {
   let mut args = vec!["diff"];
   args.extend(range.split_whitespace());
   run_git(&args, dir)
}

/// Hashes of the last `n` commits, newest first.
pub fn list_recent_commits(n: usize, dir: &str) -> Result<Vec<String>> {
   let n = n.to_string();
   let output = run_git(&["rev-list", "--max-count", &n, "HEAD"], dir)?;
   Ok(parse_rev_list(&output))
}

fn parse_rev_list(output: &str) -> Vec<String> {
   output
      .lines()
      .map(str::trim)
      .filter(|l| !l.is_empty())
      .map(ToString::to_string)
      .collect()
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_parse_rev_list() {
      let output = "abc123\ndef456\n\n";
      assert_eq!(parse_rev_list(output), vec!["abc123", "def456"]);
   }

   #[test]
   fn test_parse_rev_list_empty() {
      assert!(parse_rev_list("").is_empty());
   }

   #[test]
   fn test_run_git_bad_dir_is_error() {
      let result = run_git(&["status"], "/nonexistent/path/for/sure");
      assert!(matches!(result, Err(ScribeError::GitError(_))));
   }
}
