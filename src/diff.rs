//! Diff header parsing: file path extraction and change counting.

/// Resolve one side of a `diff --git` header to a repository path.
///
/// Returns `None` for the `/dev/null` sentinel (file created or deleted).
fn path_of(token: &str) -> Option<&str> {
   if token == "/dev/null" {
      return None;
   }
   Some(
      token
         .strip_prefix("a/")
         .or_else(|| token.strip_prefix("b/"))
         .unwrap_or(token),
   )
}

/// Extract the touched file paths from raw diff text.
///
/// Scans for `diff --git a/<old> b/<new>` headers and takes the new-path side,
/// falling back to the old-path side when the new path is `/dev/null` (the
/// file was deleted). Duplicates are removed, first-occurrence order is
/// preserved. Lines that do not match the header shape are skipped, so
/// malformed or truncated diffs simply yield fewer (possibly zero) files.
pub fn extract_files(diff: &str) -> Vec<String> {
   let mut files: Vec<String> = Vec::new();

   for line in diff.lines() {
      let Some(rest) = line.strip_prefix("diff --git ") else {
         continue;
      };

      let mut sides = rest.split_whitespace();
      let (Some(old), Some(new)) = (sides.next(), sides.next()) else {
         continue;
      };

      let Some(path) = path_of(new).or_else(|| path_of(old)) else {
         continue;
      };

      if !files.iter().any(|f| f == path) {
         files.push(path.to_string());
      }
   }

   files
}

/// Count added and removed lines, excluding the `+++`/`---` file markers.
///
/// Used for workflow display only; classification does not depend on it.
pub fn change_stat(diff: &str) -> (usize, usize) {
   let mut additions = 0;
   let mut deletions = 0;

   for line in diff.lines() {
      if line.starts_with('+') && !line.starts_with("+++") {
         additions += 1;
      } else if line.starts_with('-') && !line.starts_with("---") {
         deletions += 1;
      }
   }

   (additions, deletions)
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_extract_files_single() {
      let diff = r#"diff --git a/src/main.rs b/src/main.rs
index 123..456 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,4 @@
+use std::collections::HashMap;
 fn main() {
     println!("hello");
 }"#;
      assert_eq!(extract_files(diff), vec!["src/main.rs"]);
   }

   #[test]
   fn test_extract_files_multiple_preserves_order() {
      let diff = r"diff --git a/src/lib.rs b/src/lib.rs
index 111..222 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,2 +1,3 @@
+pub mod utils;
diff --git a/src/main.rs b/src/main.rs
index 333..444 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,1 +1,2 @@
+fn helper() {}";
      assert_eq!(extract_files(diff), vec!["src/lib.rs", "src/main.rs"]);
   }

   #[test]
   fn test_extract_files_dedupes() {
      let diff = r"diff --git a/src/lib.rs b/src/lib.rs
@@ -1,2 +1,3 @@
diff --git a/src/lib.rs b/src/lib.rs
@@ -10,2 +11,3 @@";
      assert_eq!(extract_files(diff), vec!["src/lib.rs"]);
   }

   #[test]
   fn test_extract_files_deleted_falls_back_to_old_path() {
      let diff = r"diff --git a/old.rs /dev/null
deleted file mode 100644
--- a/old.rs
+++ /dev/null
@@ -1,2 +0,0 @@
-fn test() {}";
      assert_eq!(extract_files(diff), vec!["old.rs"]);
   }

   #[test]
   fn test_extract_files_new_file() {
      let diff = r"diff --git a/new.rs b/new.rs
new file mode 100644
--- /dev/null
+++ b/new.rs
@@ -0,0 +1,2 @@
+fn test() {}";
      assert_eq!(extract_files(diff), vec!["new.rs"]);
   }

   #[test]
   fn test_extract_files_empty_input() {
      assert!(extract_files("").is_empty());
   }

   #[test]
   fn test_extract_files_no_headers() {
      let text = "just some text\nwith no diff headers\n+not even this";
      assert!(extract_files(text).is_empty());
   }

   #[test]
   fn test_extract_files_truncated_header_skipped() {
      // Header missing the b-side; skipped rather than an error
      let diff = "diff --git a/only-one-side\ndiff --git a/ok.rs b/ok.rs";
      assert_eq!(extract_files(diff), vec!["ok.rs"]);
   }

   #[test]
   fn test_change_stat_counts() {
      let diff = r"diff --git a/src/main.rs b/src/main.rs
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,3 @@
+added line
+another added
-removed line
 context";
      assert_eq!(change_stat(diff), (2, 1));
   }

   #[test]
   fn test_change_stat_ignores_file_markers() {
      let diff = "--- a/x\n+++ b/x\n";
      assert_eq!(change_stat(diff), (0, 0));
   }
}
