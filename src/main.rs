use arboard::Clipboard;
use clap::Parser;
use config::ScribeConfig;
use diffscribe::*;
use error::Result;
use pipeline::PipelineRun;
use style::icons;
use types::{Args, Mode};

const BANNER_WIDTH: usize = 60;

/// Apply CLI overrides to config
fn apply_cli_overrides(config: &mut ScribeConfig, args: &Args) {
   if args.advisory {
      config.advisory.enabled = true;
   }
   if let Some(ref model) = args.model {
      config.advisory.model = model.clone();
   }
}

/// Load config from args or default
fn load_config_from_args(args: &Args) -> Result<ScribeConfig> {
   if let Some(ref config_path) = args.config {
      ScribeConfig::from_file(config_path)
   } else {
      ScribeConfig::load()
   }
}

const fn mode_label(mode: &Mode) -> &'static str {
   match mode {
      Mode::Staged => "staged",
      Mode::Commit => "commit",
      Mode::Range => "range",
   }
}

/// Acquire the diff for the selected mode. Acquisition failures degrade to an
/// empty diff, which the pipeline reports as "no changes" rather than a hard
/// error.
fn acquire_diff(args: &Args) -> String {
   let result = match args.mode {
      Mode::Staged => git::get_staged_diff(&args.dir),
      Mode::Commit => {
         git::get_commit_diff(args.target.as_deref().unwrap_or("HEAD"), &args.dir)
      },
      Mode::Range => {
         git::get_range_diff(args.target.as_deref().unwrap_or("HEAD~1 HEAD"), &args.dir)
      },
   };

   match result {
      Ok(diff) => diff,
      Err(e) => {
         style::warn(&format!("Could not acquire diff: {e}"));
         String::new()
      },
   }
}

/// Per-stage workflow display for --verbose
fn print_workflow(diff_text: &str, run: &PipelineRun) {
   let classification = &run.classification;
   let (additions, deletions) = diff::change_stat(diff_text);

   println!("\n{} Diff analysis", style::info(icons::INFO));
   println!("  +{additions} -{deletions} lines");
   match classification.files.as_slice() {
      [] => println!("  no file headers recognized"),
      files => println!("  {} file(s): {}", files.len(), style::dim(&files.join(", "))),
   }
   println!(
      "  category: {} {} scope: {} {} confidence: {}",
      style::bold(classification.category.as_str()),
      icons::ARROW,
      classification.scope,
      icons::ARROW,
      classification.confidence
   );
   println!("  {}", style::dim(classification.reasoning));

   println!("\n{} Summary", style::info(icons::INFO));
   println!("  {}", run.summary);

   if run.advisory_used {
      println!("\n{} Advisory candidate accepted", style::info(icons::INFO));
   }

   if std::env::var("DIFFSCRIBE_DEBUG").is_ok()
      && let Ok(json) = serde_json::to_string_pretty(classification)
   {
      println!("\nJSON Structure:\n{json}");
   }
}

/// Copy text to clipboard
fn copy_to_clipboard(text: &str) -> Result<()> {
   let mut clipboard = Clipboard::new()?;
   clipboard.set_text(text)?;
   Ok(())
}

/// Generate messages for the last N commits in parallel.
fn run_batch(count: usize, args: &Args, config: &ScribeConfig) -> Result<()> {
   let hashes = git::list_recent_commits(count, &args.dir)?;
   if hashes.is_empty() {
      println!("{NO_CHANGES}");
      return Ok(());
   }

   let diffs: Vec<String> = hashes
      .iter()
      .map(|hash| {
         git::get_commit_diff(hash, &args.dir).unwrap_or_else(|e| {
            style::warn(&format!("Could not read commit {hash}: {e}"));
            String::new()
         })
      })
      .collect();

   let messages = generate_batch(&diffs, config);

   println!("\n{}", style::section_header("Generated Commit Messages", BANNER_WIDTH));
   for (hash, message) in hashes.iter().zip(&messages) {
      let short = &hash[..hash.len().min(8)];
      println!("{} {}", style::dim(short), message);
   }
   println!("{}", style::separator(BANNER_WIDTH));

   Ok(())
}

fn main() -> Result<()> {
   dotenvy::dotenv().ok();
   let args = Args::parse();

   let mut config = load_config_from_args(&args)?;
   apply_cli_overrides(&mut config, &args);

   if let Some(count) = args.batch {
      return run_batch(count, &args, &config);
   }

   println!("Analyzing {} changes...", mode_label(&args.mode));
   let diff_text = acquire_diff(&args);

   let message = match pipeline::run(&diff_text, &config) {
      Some(run) => {
         if args.verbose {
            print_workflow(&diff_text, &run);
         }
         run.message
      },
      None => NO_CHANGES.to_string(),
   };

   println!("\n{}", style::section_header("Generated Commit Message", BANNER_WIDTH));
   println!("{message}");
   println!("{}", style::separator(BANNER_WIDTH));

   if args.copy {
      match copy_to_clipboard(&message) {
         Ok(()) => println!("\n{} Copied to clipboard", style::success(icons::SUCCESS)),
         Err(e) => println!("\nNote: Failed to copy to clipboard: {e}"),
      }
   }

   Ok(())
}
