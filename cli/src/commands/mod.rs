//! Command implementations for the Noteworthy CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod read;

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Build an HTTP client, optionally configured with a Bearer token.
pub fn build_client(token: Option<&str>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(token) = token {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| anyhow::anyhow!("Invalid token value: {}", e))?;
        headers.insert(AUTHORIZATION, value);
        builder = builder.default_headers(headers);
    }

    Ok(builder.build()?)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Make an HTTP request and deserialize the JSON response.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        Ok(body)
    } else {
        Err(error_from_response(status, response).await)
    }
}

/// Make an HTTP request that expects an empty success response (204).
pub async fn make_request_empty(request: reqwest::RequestBuilder) -> Result<(), CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        Err(error_from_response(status, response).await)
    }
}

/// Turn a non-success response into a CliError, pulling the message out of
/// the server's error envelope when the body carries one.
async fn error_from_response(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> CliError {
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.pointer("/error/message")
                .and_then(|v| v.as_str())
                .map(String::from)
        })
        .unwrap_or(body);

    CliError::Server {
        status: status.as_u16(),
        message,
    }
}

/// A note as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub is_favorite: bool,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HumanReadable for Note {
    fn print_human(&self) {
        let star = if self.is_favorite {
            " *".yellow().to_string()
        } else {
            String::new()
        };

        println!("{}{}", self.title.bold(), star);
        println!("{}", "=".repeat(60));
        println!();
        println!("{}", self.content);
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!(
            "  {} {}",
            "Created:".cyan(),
            format_timestamp(&self.created_at)
        );
        println!(
            "  {} {}",
            "Updated:".cyan(),
            format_timestamp(&self.updated_at)
        );
    }
}

/// Format a timestamp for human display.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
