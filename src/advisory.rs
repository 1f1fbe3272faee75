//! LLM advisory overlay.
//!
//! An untrusted enrichment pass: given the deterministic classification and
//! summary, ask an OpenAI-compatible endpoint for a candidate message. The
//! caller validates the candidate and is free to discard it; every failure
//! mode here surfaces as an `Err` that the orchestrator logs and ignores.

use std::{thread, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
   config::AdvisoryConfig,
   error::{Result, ScribeError},
   types::Classification,
};

#[derive(Debug, Serialize)]
struct Message {
   role:    String,
   content: String,
}

#[derive(Debug, Serialize)]
struct ApiRequest {
   model:       String,
   max_tokens:  u32,
   temperature: f32,
   messages:    Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
   choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
   message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
   #[serde(default)]
   content: Option<String>,
}

/// Build HTTP client with timeouts from config
fn build_client(config: &AdvisoryConfig) -> Result<reqwest::blocking::Client> {
   let client = reqwest::blocking::Client::builder()
      .timeout(Duration::from_secs(config.request_timeout_secs))
      .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
      .build()?;
   Ok(client)
}

/// Task prompt for the overlay: classification context in, one candidate
/// message out.
fn build_prompt(classification: &Classification, summary: &str, max_length: usize) -> String {
   let files = if classification.files.is_empty() {
      "unknown".to_string()
   } else {
      classification
         .files
         .iter()
         .take(3)
         .map(String::as_str)
         .collect::<Vec<_>>()
         .join(", ")
   };

   format!(
      "Create a conventional commit message for:\n\
       - Type: {category}\n\
       - Scope: {scope}\n\
       - Summary: {summary}\n\
       - Files: {files}\n\
       \n\
       Return ONLY the commit message in format: type(scope): description\n\
       Keep it under {max_length} characters.",
      category = classification.category,
      scope = classification.scope,
   )
}

/// Pull the first non-empty completion out of a response.
fn extract_content(response: ApiResponse) -> Result<String> {
   response
      .choices
      .into_iter()
      .find_map(|choice| {
         choice
            .message
            .content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
      })
      .ok_or(ScribeError::AdvisoryEmpty)
}

fn request_candidate(
   client: &reqwest::blocking::Client,
   prompt: &str,
   config: &AdvisoryConfig,
) -> Result<String> {
   let request = ApiRequest {
      model:       config.model.clone(),
      max_tokens:  100,
      temperature: config.temperature,
      messages:    vec![Message { role: "user".to_string(), content: prompt.to_string() }],
   };

   let mut builder = client
      .post(format!("{}/chat/completions", config.api_base_url.trim_end_matches('/')))
      .json(&request);

   if let Some(ref api_key) = config.api_key {
      builder = builder.bearer_auth(api_key);
   }

   let response = builder.send()?;
   let status = response.status();

   if !status.is_success() {
      return Err(ScribeError::AdvisoryError {
         status: status.as_u16(),
         body:   response.text().unwrap_or_default(),
      });
   }

   extract_content(response.json::<ApiResponse>()?)
}

/// Ask the overlay for a candidate message, with bounded retries.
///
/// Timeouts come from the client configuration, so the call can never block
/// past `max_retries * request_timeout_secs` plus backoff.
pub fn propose_message(
   classification: &Classification,
   summary: &str,
   max_length: usize,
   config: &AdvisoryConfig,
) -> Result<String> {
   let client = build_client(config)?;
   let prompt = build_prompt(classification, summary, max_length);

   let mut attempt = 0;
   loop {
      attempt += 1;

      match request_candidate(&client, &prompt, config) {
         Ok(candidate) => return Ok(candidate),
         Err(e) if attempt < config.max_retries => {
            let backoff_ms = config.initial_backoff_ms * (1 << (attempt - 1));
            eprintln!("Advisory retry {}/{} after {}ms: {e}", attempt, config.max_retries, backoff_ms);
            thread::sleep(Duration::from_millis(backoff_ms));
         },
         Err(e) => return Err(e),
      }
   }
}
