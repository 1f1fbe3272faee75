//! Pipeline orchestration: parse → classify → summarize → format.
//!
//! Each stage is a pure function of its inputs and runs at most once per
//! invocation. The only branch is the empty-diff short-circuit. Nothing here
//! mutates shared state, so invocations are freely parallelizable.

use rayon::prelude::*;

use crate::{
   advisory, classify,
   config::ScribeConfig,
   diff, format, style, summary,
   types::Classification,
};

/// Sentinel emitted for empty or whitespace-only input.
pub const NO_CHANGES: &str = "No changes detected.";

/// Intermediate artifacts of one pipeline invocation, kept for workflow
/// display. The message is the terminal artifact.
#[derive(Debug, Clone)]
pub struct PipelineRun {
   pub classification: Classification,
   pub summary:        String,
   /// True when a validated advisory candidate replaced the deterministic
   /// render
   pub advisory_used:  bool,
   pub message:        String,
}

/// Run the pipeline over one diff. Returns `None` for empty or
/// whitespace-only input (the caller renders the sentinel).
pub fn run(diff_text: &str, config: &ScribeConfig) -> Option<PipelineRun> {
   if diff_text.trim().is_empty() {
      return None;
   }

   let files = diff::extract_files(diff_text);
   let classification = classify::classify(diff_text, &files);
   let summary = summary::compose_summary(&classification);

   if config.advisory.enabled {
      match advisory::propose_message(&classification, &summary, config.max_length, &config.advisory)
      {
         Ok(candidate) => {
            if let Some(message) = format::accept_candidate(&candidate, config.max_length) {
               return Some(PipelineRun { classification, summary, advisory_used: true, message });
            }
            style::warn("Advisory candidate failed validation, using deterministic message");
         },
         Err(e) => style::warn(&format!("Advisory overlay unavailable: {e}")),
      }
   }

   let message = format::render(&classification, config.max_length);
   Some(PipelineRun { classification, summary, advisory_used: false, message })
}

/// Generate a commit message for one diff.
///
/// Total over all inputs: empty input yields the sentinel, everything else a
/// well-formed conventional-commit message.
pub fn generate(diff_text: &str, config: &ScribeConfig) -> String {
   match run(diff_text, config) {
      Some(run) => run.message,
      None => NO_CHANGES.to_string(),
   }
}

/// Generate messages for many diffs in parallel. Result order matches input
/// order; invocations share nothing.
pub fn generate_batch(diffs: &[String], config: &ScribeConfig) -> Vec<String> {
   diffs.par_iter().map(|d| generate(d, config)).collect()
}
