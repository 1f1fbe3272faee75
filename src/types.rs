use std::{fmt, path::PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

// === Classification result types ===

/// Conventional commit category. Classification always yields exactly one of
/// these; there is no "unknown" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
   Feat,
   Fix,
   Docs,
   Style,
   Refactor,
   Test,
   Chore,
   Build,
   Ci,
}

impl ChangeCategory {
   /// All categories, in conventional-commit display order.
   pub const ALL: &'static [Self] = &[
      Self::Feat,
      Self::Fix,
      Self::Docs,
      Self::Style,
      Self::Refactor,
      Self::Test,
      Self::Chore,
      Self::Build,
      Self::Ci,
   ];

   /// Lowercase wire/display form (the `type` segment of the message).
   pub const fn as_str(&self) -> &'static str {
      match self {
         Self::Feat => "feat",
         Self::Fix => "fix",
         Self::Docs => "docs",
         Self::Style => "style",
         Self::Refactor => "refactor",
         Self::Test => "test",
         Self::Chore => "chore",
         Self::Build => "build",
         Self::Ci => "ci",
      }
   }
}

impl fmt::Display for ChangeCategory {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

/// Scope label attached to a classification.
///
/// Sentinel values (`maintenance`, `none`) are never rendered with
/// parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
   Code,
   Markdown,
   Readme,
   Documentation,
   Api,
   Auth,
   Ui,
   Validation,
   Bug,
   Testing,
   Formatting,
   Dependencies,
   Pipeline,
   Maintenance,
   None,
}

impl Scope {
   pub const fn as_str(&self) -> &'static str {
      match self {
         Self::Code => "code",
         Self::Markdown => "markdown",
         Self::Readme => "readme",
         Self::Documentation => "documentation",
         Self::Api => "api",
         Self::Auth => "auth",
         Self::Ui => "ui",
         Self::Validation => "validation",
         Self::Bug => "bug",
         Self::Testing => "testing",
         Self::Formatting => "formatting",
         Self::Dependencies => "dependencies",
         Self::Pipeline => "pipeline",
         Self::Maintenance => "maintenance",
         Self::None => "none",
      }
   }

   /// Sentinel scopes suppress the `(scope)` segment when rendering.
   pub const fn is_sentinel(&self) -> bool {
      matches!(self, Self::Maintenance | Self::None)
   }
}

impl fmt::Display for Scope {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

/// Confidence of a classification. Informational only; formatting does not
/// depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
   High,
   Medium,
   Low,
}

impl Confidence {
   pub const fn as_str(&self) -> &'static str {
      match self {
         Self::High => "high",
         Self::Medium => "medium",
         Self::Low => "low",
      }
   }
}

impl fmt::Display for Confidence {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

/// Immutable result of classifying one diff. Produced once by the classifier,
/// consumed by the summary composer and formatter.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
   pub category:   ChangeCategory,
   pub scope:      Scope,
   pub confidence: Confidence,
   pub reasoning:  &'static str,
   pub files:      Vec<String>,
}

// === CLI types ===

#[derive(Debug, Clone, ValueEnum)]
pub enum Mode {
   /// Analyze staged changes
   Staged,
   /// Analyze a specific commit
   Commit,
   /// Analyze a custom commit range
   Range,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate conventional commit messages from git diffs", long_about = None)]
pub struct Args {
   /// What to analyze
   #[arg(long, value_enum, default_value = "staged")]
   pub mode: Mode,

   /// Commit hash for --mode=commit, or range (e.g. HEAD~3..HEAD) for
   /// --mode=range
   #[arg(long)]
   pub target: Option<String>,

   /// Directory to run git commands in
   #[arg(long, default_value = ".")]
   pub dir: String,

   /// Copy the message to clipboard
   #[arg(long)]
   pub copy: bool,

   /// Show the per-stage pipeline workflow
   #[arg(long, short = 'v')]
   pub verbose: bool,

   /// Consult the LLM advisory overlay (the deterministic pipeline never
   /// requires it)
   #[arg(long)]
   pub advisory: bool,

   /// Model for the advisory overlay
   #[arg(long, short = 'm')]
   pub model: Option<String>,

   /// Generate messages for the last N commits in parallel
   #[arg(long, conflicts_with = "target")]
   pub batch: Option<usize>,

   /// Path to config file (default: ~/.config/diffscribe/config.toml)
   #[arg(long)]
   pub config: Option<PathBuf>,
}

impl Default for Args {
   fn default() -> Self {
      Self {
         mode:     Mode::Staged,
         target:   None,
         dir:      ".".to_string(),
         copy:     false,
         verbose:  false,
         advisory: false,
         model:    None,
         batch:    None,
         config:   None,
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_category_as_str_roundtrip() {
      let expected =
         ["feat", "fix", "docs", "style", "refactor", "test", "chore", "build", "ci"];
      let actual: Vec<&str> = ChangeCategory::ALL.iter().map(|c| c.as_str()).collect();
      assert_eq!(actual, expected);
   }

   #[test]
   fn test_category_closed_set_size() {
      assert_eq!(ChangeCategory::ALL.len(), 9);
   }

   #[test]
   fn test_scope_sentinels() {
      assert!(Scope::Maintenance.is_sentinel());
      assert!(Scope::None.is_sentinel());
      assert!(!Scope::Auth.is_sentinel());
      assert!(!Scope::Code.is_sentinel());
   }

   #[test]
   fn test_scope_display_lowercase() {
      assert_eq!(Scope::Auth.to_string(), "auth");
      assert_eq!(Scope::Validation.to_string(), "validation");
      assert_eq!(Scope::Maintenance.to_string(), "maintenance");
   }

   #[test]
   fn test_category_serde_lowercase() {
      let json = serde_json::to_string(&ChangeCategory::Feat).unwrap();
      assert_eq!(json, "\"feat\"");
      let back: ChangeCategory = serde_json::from_str("\"ci\"").unwrap();
      assert_eq!(back, ChangeCategory::Ci);
   }

   #[test]
   fn test_confidence_display() {
      assert_eq!(Confidence::High.to_string(), "high");
      assert_eq!(Confidence::Low.as_str(), "low");
   }
}
