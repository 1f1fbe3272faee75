//! Summary composition: a short present-tense phrase for a classification.
//!
//! The phrase is advisory context and workflow display; the formatter's
//! deterministic description table does not depend on it.

use crate::types::{ChangeCategory, Classification, Scope};

/// File-context clause for 1, 2, or 3+ files. Empty list yields an empty
/// clause.
fn file_context(files: &[String]) -> String {
   match files {
      [] => String::new(),
      [only] => format!(" in {only}"),
      [first, second] => format!(" in {first} and {second}"),
      [first, rest @ ..] => format!(" in {first} and {} other files", rest.len()),
   }
}

/// Compose a human-readable summary phrase for a classification.
///
/// Phrases are keyed by category, refined by scope; unknown combinations fall
/// back to the category-level phrase. Never fails.
pub fn compose_summary(classification: &Classification) -> String {
   let context = file_context(&classification.files);

   match classification.category {
      ChangeCategory::Feat => match classification.scope {
         Scope::Auth => format!("Add authentication and security features{context}"),
         _ => format!("Add new functionality{context}"),
      },
      ChangeCategory::Fix => match classification.scope {
         Scope::Validation => format!("Fix validation and input handling{context}"),
         _ => format!("Fix bugs and resolve issues{context}"),
      },
      ChangeCategory::Refactor => {
         format!("Refactor code for better structure and maintainability{context}")
      },
      ChangeCategory::Test => format!("Add or update tests{context}"),
      ChangeCategory::Docs => match classification.scope {
         Scope::Readme => format!("Update README{context}"),
         Scope::Markdown => format!("Update markdown documentation{context}"),
         Scope::Documentation => format!("Update API documentation{context}"),
         _ => format!("Update documentation{context}"),
      },
      ChangeCategory::Style => "Improve code formatting and style".to_string(),
      ChangeCategory::Build => "Update build configuration and dependencies".to_string(),
      ChangeCategory::Ci => "Update CI/CD pipeline configuration".to_string(),
      ChangeCategory::Chore => "Update codebase with maintenance improvements".to_string(),
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::types::Confidence;

   fn classification(
      category: ChangeCategory,
      scope: Scope,
      files: &[&str],
   ) -> Classification {
      Classification {
         category,
         scope,
         confidence: Confidence::High,
         reasoning: "",
         files: files.iter().map(ToString::to_string).collect(),
      }
   }

   #[test]
   fn test_feat_auth_phrase() {
      let c = classification(ChangeCategory::Feat, Scope::Auth, &[]);
      assert_eq!(compose_summary(&c), "Add authentication and security features");
   }

   #[test]
   fn test_fix_validation_phrase() {
      let c = classification(ChangeCategory::Fix, Scope::Validation, &[]);
      assert_eq!(compose_summary(&c), "Fix validation and input handling");
   }

   #[test]
   fn test_unknown_combination_falls_back_to_category_phrase() {
      let c = classification(ChangeCategory::Feat, Scope::Validation, &[]);
      assert_eq!(compose_summary(&c), "Add new functionality");
   }

   #[test]
   fn test_single_file_context() {
      let c = classification(ChangeCategory::Feat, Scope::Code, &["src/main.rs"]);
      assert_eq!(compose_summary(&c), "Add new functionality in src/main.rs");
   }

   #[test]
   fn test_two_file_context() {
      let c = classification(ChangeCategory::Fix, Scope::Validation, &["a.rs", "b.rs"]);
      assert_eq!(compose_summary(&c), "Fix validation and input handling in a.rs and b.rs");
   }

   #[test]
   fn test_many_file_context() {
      let c =
         classification(ChangeCategory::Test, Scope::Testing, &["a.rs", "b.rs", "c.rs", "d.rs"]);
      assert_eq!(compose_summary(&c), "Add or update tests in a.rs and 3 other files");
   }

   #[test]
   fn test_empty_file_list_degrades_silently() {
      let c = classification(ChangeCategory::Refactor, Scope::Code, &[]);
      assert_eq!(
         compose_summary(&c),
         "Refactor code for better structure and maintainability"
      );
   }

   #[test]
   fn test_docs_scope_refinements() {
      let readme = classification(ChangeCategory::Docs, Scope::Readme, &[]);
      assert_eq!(compose_summary(&readme), "Update README");
      let markdown = classification(ChangeCategory::Docs, Scope::Markdown, &[]);
      assert_eq!(compose_summary(&markdown), "Update markdown documentation");
   }

   #[test]
   fn test_no_file_context_for_style_build_ci_chore() {
      for (category, scope) in [
         (ChangeCategory::Style, Scope::Formatting),
         (ChangeCategory::Build, Scope::Dependencies),
         (ChangeCategory::Ci, Scope::Pipeline),
         (ChangeCategory::Chore, Scope::Maintenance),
      ] {
         let c = classification(category, scope, &["x.rs"]);
         assert!(!compose_summary(&c).contains("x.rs"));
      }
   }
}
