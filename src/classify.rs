//! Rule-based change classification.
//!
//! The classifier is an ordered rule table evaluated top to bottom; the first
//! matching rule wins. The ordering is part of the contract: reordering rules
//! changes behavior, so the table is data rather than control flow and tests
//! pin the precedence.

use crate::types::{ChangeCategory, Classification, Confidence, Scope};

/// File extensions treated as source code when deciding whether a diff that
/// mentions documentation tokens is really a code change.
const CODE_EXTENSIONS: &[&str] = &[
   "rs", "c", "cpp", "cc", "h", "hpp", "java", "kt", "scala", "cs", "go", "py", "rb", "php",
   "js", "ts", "jsx", "tsx", "swift", "lua", "sh", "bash", "pl", "ex", "exs", "hs", "sql",
];

/// Definition-level keywords: enough to call a diff "code" for the
/// documentation exclusion guard.
const DEFINITION_KEYWORDS: &[&str] = &["fn ", "def ", "struct ", "class ", "import ", "return "];

/// Full code-structure keyword set for the feature rule (definitions plus
/// control flow).
const CODE_KEYWORDS: &[&str] = &[
   "fn ", "def ", "struct ", "class ", "import ", "return ", "if ", "for ", "while ",
];

const DOC_TOKENS: &[&str] = &["<!--", "-->", "readme"];
const AUTH_KEYWORDS: &[&str] = &["log", "auth", "login", "session", "token", "jwt"];
const FIX_KEYWORDS: &[&str] = &["pattern", "regex", "validation", "fix", "bug", "error"];
const REFACTOR_KEYWORDS: &[&str] = &["private", "encapsulation", "refactor", "cleanup"];
const TEST_KEYWORDS: &[&str] = &["test", "spec", "mock", "stub"];
const STYLE_KEYWORDS: &[&str] = &["style", "format", "lint", "prettier"];
const BUILD_KEYWORDS: &[&str] = &["build", "compile", "package", "dependencies"];
const CI_KEYWORDS: &[&str] = &["ci", "pipeline", "workflow", "github", "actions"];

/// Predicate of one rule, evaluated against the lowercased diff text and the
/// extracted file list.
enum Predicate {
   /// Documentation files or tokens, guarded against code diffs that merely
   /// mention documentation markers.
   Documentation,
   /// Code-structure keywords. Scope refines to `auth` when authentication
   /// keywords appear alongside the structural ones.
   CodeStructure,
   /// Any of the keywords appears as a substring of the diff text.
   Keywords(&'static [&'static str]),
   /// Always matches. Must be the last rule.
   Always,
}

struct Rule {
   predicate:  Predicate,
   category:   ChangeCategory,
   scope:      Scope,
   confidence: Confidence,
   reasoning:  &'static str,
}

/// Rule table, highest precedence first. The final `Always` rule guarantees
/// every diff classifies.
const RULES: &[Rule] = &[
   Rule {
      predicate:  Predicate::Documentation,
      category:   ChangeCategory::Docs,
      scope:      Scope::Documentation,
      confidence: Confidence::High,
      reasoning:  "Documentation changes detected",
   },
   Rule {
      predicate:  Predicate::CodeStructure,
      category:   ChangeCategory::Feat,
      scope:      Scope::Code,
      confidence: Confidence::High,
      reasoning:  "Code enhancements and new functionality detected",
   },
   Rule {
      predicate:  Predicate::Keywords(AUTH_KEYWORDS),
      category:   ChangeCategory::Feat,
      scope:      Scope::Auth,
      confidence: Confidence::High,
      reasoning:  "Authentication and security features detected",
   },
   Rule {
      predicate:  Predicate::Keywords(FIX_KEYWORDS),
      category:   ChangeCategory::Fix,
      scope:      Scope::Validation,
      confidence: Confidence::High,
      reasoning:  "Bug fixes and validation improvements detected",
   },
   Rule {
      predicate:  Predicate::Keywords(REFACTOR_KEYWORDS),
      category:   ChangeCategory::Refactor,
      scope:      Scope::Code,
      confidence: Confidence::Medium,
      reasoning:  "Code structure and encapsulation improvements detected",
   },
   Rule {
      predicate:  Predicate::Keywords(TEST_KEYWORDS),
      category:   ChangeCategory::Test,
      scope:      Scope::Testing,
      confidence: Confidence::High,
      reasoning:  "Test code additions or modifications detected",
   },
   Rule {
      predicate:  Predicate::Keywords(STYLE_KEYWORDS),
      category:   ChangeCategory::Style,
      scope:      Scope::Formatting,
      confidence: Confidence::Medium,
      reasoning:  "Code formatting and style changes detected",
   },
   Rule {
      predicate:  Predicate::Keywords(BUILD_KEYWORDS),
      category:   ChangeCategory::Build,
      scope:      Scope::Dependencies,
      confidence: Confidence::High,
      reasoning:  "Build system and dependency changes detected",
   },
   Rule {
      predicate:  Predicate::Keywords(CI_KEYWORDS),
      category:   ChangeCategory::Ci,
      scope:      Scope::Pipeline,
      confidence: Confidence::High,
      reasoning:  "CI/CD pipeline changes detected",
   },
   Rule {
      predicate:  Predicate::Always,
      category:   ChangeCategory::Chore,
      scope:      Scope::Maintenance,
      confidence: Confidence::Low,
      reasoning:  "General maintenance changes detected",
   },
];

fn extension_of(path: &str) -> Option<&str> {
   let name = path.rsplit('/').next().unwrap_or(path);
   name.rsplit_once('.').map(|(_, ext)| ext)
}

fn has_code_extension(files: &[String]) -> bool {
   files.iter().any(|f| {
      extension_of(f).is_some_and(|ext| {
         CODE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
      })
   })
}

fn is_markdown(path: &str) -> bool {
   let lower = path.to_lowercase();
   lower.ends_with(".md") || lower.ends_with(".markdown")
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
   needles.iter().any(|n| haystack.contains(n))
}

/// Documentation signal: markdown files in the set, or doc tokens in the
/// text, unless the diff also carries source files with definition keywords
/// (a code change that happens to touch comment markers).
fn documentation_signal(diff_lower: &str, files: &[String]) -> bool {
   let has_doc_files = files.iter().any(|f| is_markdown(f));
   let has_doc_tokens = contains_any(diff_lower, DOC_TOKENS);
   let is_code_change =
      has_code_extension(files) && contains_any(diff_lower, DEFINITION_KEYWORDS);

   (has_doc_files || has_doc_tokens) && !is_code_change
}

/// Refine the docs scope from the file list: a README beats generic
/// markdown, markdown beats token-only detection.
fn documentation_scope(files: &[String]) -> Scope {
   if files.iter().any(|f| f.to_lowercase().contains("readme")) {
      Scope::Readme
   } else if files.iter().any(|f| is_markdown(f)) {
      Scope::Markdown
   } else {
      Scope::Documentation
   }
}

impl Rule {
   fn matches(&self, diff_lower: &str, files: &[String]) -> bool {
      match self.predicate {
         Predicate::Documentation => documentation_signal(diff_lower, files),
         Predicate::CodeStructure => contains_any(diff_lower, CODE_KEYWORDS),
         Predicate::Keywords(keywords) => contains_any(diff_lower, keywords),
         Predicate::Always => true,
      }
   }

   /// Scope for a matched rule. Most rules carry a fixed scope; the
   /// documentation and code-structure rules refine theirs from the input.
   fn resolve_scope(&self, diff_lower: &str, files: &[String]) -> Scope {
      match self.predicate {
         Predicate::Documentation => documentation_scope(files),
         Predicate::CodeStructure if contains_any(diff_lower, AUTH_KEYWORDS) => Scope::Auth,
         _ => self.scope,
      }
   }
}

/// Classify a diff into exactly one category.
///
/// Never fails: any input, including empty or non-diff text, reaches a rule
/// (the table ends with a catch-all).
pub fn classify(diff: &str, files: &[String]) -> Classification {
   let diff_lower = diff.to_lowercase();

   for rule in RULES {
      if rule.matches(&diff_lower, files) {
         return Classification {
            category:   rule.category,
            scope:      rule.resolve_scope(&diff_lower, files),
            confidence: rule.confidence,
            reasoning:  rule.reasoning,
            files:      files.to_vec(),
         };
      }
   }

   unreachable!("rule table ends with a catch-all")
}
