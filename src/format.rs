//! Message rendering with deterministic descriptions.
//!
//! Descriptions come from a fixed lookup table keyed by (category, scope),
//! independent of the composed summary, so output stays stable and testable
//! even when the advisory overlay is flaky or absent. Advisory candidates
//! pass a validation gate before they may replace the deterministic render.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::{
   normalization::normalize_advisory,
   types::{ChangeCategory, Classification, Scope},
};

/// Scope-specific descriptions. Order mirrors rule precedence for
/// readability; lookup is exact-match.
fn description_table() -> &'static IndexMap<(ChangeCategory, Scope), &'static str> {
   static TABLE: OnceLock<IndexMap<(ChangeCategory, Scope), &'static str>> = OnceLock::new();
   TABLE.get_or_init(|| {
      IndexMap::from([
         ((ChangeCategory::Feat, Scope::Auth), "add authentication features"),
         ((ChangeCategory::Feat, Scope::Api), "add new API endpoints"),
         ((ChangeCategory::Feat, Scope::Ui), "add new user interface"),
         ((ChangeCategory::Feat, Scope::Code), "add new functionality"),
         ((ChangeCategory::Fix, Scope::Validation), "fix validation issues"),
         ((ChangeCategory::Fix, Scope::Bug), "fix critical bugs"),
         ((ChangeCategory::Docs, Scope::Api), "update API documentation"),
         ((ChangeCategory::Docs, Scope::Readme), "update README"),
         ((ChangeCategory::Docs, Scope::Markdown), "update markdown documentation"),
      ])
   })
}

/// Category-level fallback description. Total over the closed category set,
/// so rendering can never miss.
const fn default_description(category: ChangeCategory) -> &'static str {
   match category {
      ChangeCategory::Feat => "add new functionality",
      ChangeCategory::Fix => "fix issues and bugs",
      ChangeCategory::Docs => "update documentation",
      ChangeCategory::Refactor => "refactor code structure",
      ChangeCategory::Test => "add or update tests",
      ChangeCategory::Style => "improve code formatting",
      ChangeCategory::Build => "update build configuration",
      ChangeCategory::Ci => "update CI/CD pipeline",
      ChangeCategory::Chore => "maintain codebase",
   }
}

fn description_for(category: ChangeCategory, scope: Scope) -> &'static str {
   description_table()
      .get(&(category, scope))
      .copied()
      .unwrap_or_else(|| default_description(category))
}

/// Render a classification as `type[(scope)]: description`.
///
/// Sentinel scopes are suppressed; the description segment is clamped to
/// `max_length`. Always returns a syntactically valid message.
pub fn render(classification: &Classification, max_length: usize) -> String {
   let scope_part = if classification.scope.is_sentinel() {
      String::new()
   } else {
      format!("({})", classification.scope)
   };

   let mut description = description_for(classification.category, classification.scope).to_string();
   if description.len() > max_length {
      description.truncate(max_length);
   }

   format!("{}{}: {}", classification.category, scope_part, description)
}

/// Validation gate for an advisory-sourced candidate message.
///
/// The candidate is ASCII-normalized, then accepted only if it contains the
/// `:` separator and does not exceed `max_length` in total. Anything else is
/// discarded in favor of the deterministic render.
pub fn accept_candidate(candidate: &str, max_length: usize) -> Option<String> {
   let normalized = normalize_advisory(candidate);

   if normalized.is_empty() || !normalized.contains(':') || normalized.len() > max_length {
      return None;
   }

   Some(normalized)
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::types::Confidence;

   fn classification(category: ChangeCategory, scope: Scope) -> Classification {
      Classification {
         category,
         scope,
         confidence: Confidence::High,
         reasoning: "",
         files: vec![],
      }
   }

   #[test]
   fn test_render_feat_auth() {
      let msg = render(&classification(ChangeCategory::Feat, Scope::Auth), 50);
      assert_eq!(msg, "feat(auth): add authentication features");
   }

   #[test]
   fn test_render_feat_code() {
      let msg = render(&classification(ChangeCategory::Feat, Scope::Code), 50);
      assert_eq!(msg, "feat(code): add new functionality");
   }

   #[test]
   fn test_render_fix_validation() {
      let msg = render(&classification(ChangeCategory::Fix, Scope::Validation), 50);
      assert_eq!(msg, "fix(validation): fix validation issues");
   }

   #[test]
   fn test_render_docs_readme() {
      let msg = render(&classification(ChangeCategory::Docs, Scope::Readme), 50);
      assert_eq!(msg, "docs(readme): update README");
   }

   #[test]
   fn test_render_docs_markdown() {
      let msg = render(&classification(ChangeCategory::Docs, Scope::Markdown), 50);
      assert_eq!(msg, "docs(markdown): update markdown documentation");
   }

   #[test]
   fn test_render_chore_suppresses_sentinel_scope() {
      let msg = render(&classification(ChangeCategory::Chore, Scope::Maintenance), 50);
      assert_eq!(msg, "chore: maintain codebase");
      assert!(!msg.contains('('));
   }

   #[test]
   fn test_render_none_scope_suppressed() {
      let msg = render(&classification(ChangeCategory::Fix, Scope::None), 50);
      assert_eq!(msg, "fix: fix issues and bugs");
   }

   #[test]
   fn test_render_unlisted_combination_uses_category_default() {
      let msg = render(&classification(ChangeCategory::Refactor, Scope::Code), 50);
      assert_eq!(msg, "refactor(code): refactor code structure");
   }

   #[test]
   fn test_render_build_and_ci_defaults() {
      assert_eq!(
         render(&classification(ChangeCategory::Build, Scope::Dependencies), 50),
         "build(dependencies): update build configuration"
      );
      assert_eq!(
         render(&classification(ChangeCategory::Ci, Scope::Pipeline), 50),
         "ci(pipeline): update CI/CD pipeline"
      );
   }

   #[test]
   fn test_description_bound_holds_for_every_category() {
      for &category in ChangeCategory::ALL {
         let msg = render(&classification(category, Scope::Maintenance), 50);
         let description = msg.split_once(": ").unwrap().1;
         assert!(description.len() <= 50, "{msg}");
      }
   }

   #[test]
   fn test_description_clamped_to_small_bound() {
      let msg = render(&classification(ChangeCategory::Feat, Scope::Code), 7);
      assert_eq!(msg, "feat(code): add new");
   }

   #[test]
   fn test_accept_candidate_valid() {
      let accepted = accept_candidate("feat(auth): add login flow", 50);
      assert_eq!(accepted.as_deref(), Some("feat(auth): add login flow"));
   }

   #[test]
   fn test_accept_candidate_rejects_missing_separator() {
      assert!(accept_candidate("add login flow", 50).is_none());
   }

   #[test]
   fn test_accept_candidate_rejects_overlong() {
      let long = format!("feat: {}", "x".repeat(60));
      assert!(accept_candidate(&long, 50).is_none());
   }

   #[test]
   fn test_accept_candidate_rejects_empty() {
      assert!(accept_candidate("", 50).is_none());
      assert!(accept_candidate("   \n", 50).is_none());
   }

   #[test]
   fn test_accept_candidate_normalizes_unicode() {
      let accepted = accept_candidate("feat(ui): add \u{201C}dark\u{201D} mode", 50);
      assert_eq!(accepted.as_deref(), Some("feat(ui): add \"dark\" mode"));
   }
}
