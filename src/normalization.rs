//! Normalization of advisory-sourced text.
//!
//! Model output tends to carry typographic Unicode (smart quotes, em-dashes,
//! ellipses) that has no place in a commit message. Candidates are folded to
//! plain ASCII punctuation and single-line whitespace before validation.

use unicode_normalization::UnicodeNormalization;

/// Fold typographic Unicode to ASCII equivalents.
fn fold_punctuation(text: &str) -> String {
   let normalized: String = text.nfkd().collect();

   normalized
      // Smart quotes to straight quotes
      .replace(['\u{2018}', '\u{2019}', '\u{201A}', '\u{2039}', '\u{203A}'], "'")
      .replace(['\u{201C}', '\u{201D}', '\u{201E}', '\u{00AB}', '\u{00BB}'], "\"")
      // Dashes and hyphens
      .replace(['\u{2010}', '\u{2011}', '\u{2012}', '\u{2212}'], "-")
      .replace(['\u{2013}', '\u{2014}', '\u{2015}'], "--")
      // Ellipsis
      .replace('\u{2026}', "...")
      // Non-breaking and thin spaces
      .replace(['\u{00A0}', '\u{2009}', '\u{200A}', '\u{202F}'], " ")
}

/// Normalize an advisory candidate: ASCII punctuation, collapsed whitespace,
/// single line, no surrounding space.
pub fn normalize_advisory(text: &str) -> String {
   fold_punctuation(text)
      .split_whitespace()
      .collect::<Vec<_>>()
      .join(" ")
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_smart_quotes_folded() {
      assert_eq!(
         normalize_advisory("fix: handle \u{2018}odd\u{2019} \u{201C}inputs\u{201D}"),
         "fix: handle 'odd' \"inputs\""
      );
   }

   #[test]
   fn test_dashes_folded() {
      assert_eq!(normalize_advisory("feat: add retry \u{2014} with backoff"), "feat: add retry -- with backoff");
      assert_eq!(normalize_advisory("non\u{2011}breaking"), "non-breaking");
   }

   #[test]
   fn test_whitespace_collapsed_to_single_line() {
      assert_eq!(normalize_advisory("  feat:   add\nnew   thing \t"), "feat: add new thing");
   }

   #[test]
   fn test_plain_ascii_unchanged() {
      assert_eq!(normalize_advisory("chore: maintain codebase"), "chore: maintain codebase");
   }

   #[test]
   fn test_empty_input() {
      assert_eq!(normalize_advisory(""), "");
      assert_eq!(normalize_advisory("   "), "");
   }

   #[test]
   fn test_ellipsis_folded() {
      assert_eq!(normalize_advisory("docs: expand notes\u{2026}"), "docs: expand notes...");
   }
}
