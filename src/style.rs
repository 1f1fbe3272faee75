//! Terminal styling utilities for consistent CLI output.
//!
//! Respects `NO_COLOR` environment variable and terminal capabilities.

use std::{
   io::{self, Write},
   sync::OnceLock,
};

use owo_colors::OwoColorize;

/// Whether color output is enabled (cached on first call).
static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if colors should be used.
pub fn colors_enabled() -> bool {
   *COLOR_ENABLED.get_or_init(|| {
      // NO_COLOR takes precedence (https://no-color.org/)
      if std::env::var("NO_COLOR").is_ok() {
         return false;
      }
      // Check if stdout is a terminal and supports color
      supports_color::on(supports_color::Stream::Stdout).is_some_and(|level| level.has_basic)
   })
}

// === Color Palette ===

/// Success: checkmarks, completed actions (green + bold).
pub fn success(s: &str) -> String {
   if colors_enabled() {
      s.green().bold().to_string()
   } else {
      s.to_string()
   }
}

/// Warning: validation misses, non-fatal issues (yellow).
pub fn warning(s: &str) -> String {
   if colors_enabled() {
      s.yellow().to_string()
   } else {
      s.to_string()
   }
}

/// Info: informational messages (cyan).
pub fn info(s: &str) -> String {
   if colors_enabled() {
      s.cyan().to_string()
   } else {
      s.to_string()
   }
}

/// Dim: less important details, file paths (dimmed).
pub fn dim(s: &str) -> String {
   if colors_enabled() {
      s.dimmed().to_string()
   } else {
      s.to_string()
   }
}

/// Bold: headers, key values.
pub fn bold(s: &str) -> String {
   if colors_enabled() {
      s.bold().to_string()
   } else {
      s.to_string()
   }
}

/// Print warning message on its own stderr line.
pub fn warn(msg: &str) {
   print!("\r\x1b[K");
   io::stdout().flush().ok();
   eprintln!("{} {}", warning(icons::WARNING), warning(msg));
}

/// Horizontal separator line.
pub fn separator(width: usize) -> String {
   let line = "=".repeat(width);
   if colors_enabled() { dim(&line) } else { line }
}

/// Section header with a separator line above and below.
pub fn section_header(title: &str, width: usize) -> String {
   format!("{}\n{}\n{}", separator(width), bold(title), separator(width))
}

// === Status Icons ===

pub mod icons {
   pub const SUCCESS: &str = "\u{2713}";
   pub const WARNING: &str = "\u{26A0}";
   pub const INFO: &str = "\u{2139}";
   pub const ARROW: &str = "\u{2192}";
}
