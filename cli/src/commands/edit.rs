//! EDIT command - Update fields of an existing note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use uuid::Uuid;

use super::{Note, make_request, output};

/// Arguments for the edit command. Flags that are not given leave the
/// corresponding field untouched.
#[derive(Args)]
pub struct EditArgs {
    /// Note ID to edit
    pub id: Uuid,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New body text
    #[arg(long)]
    pub content: Option<String>,

    /// Set the favorite flag (true or false)
    #[arg(long, value_name = "BOOL")]
    pub favorite: Option<bool>,
}

/// Request body for updating a note. Omitted fields are not sent.
#[derive(Serialize)]
struct UpdateNoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_favorite: Option<bool>,
}

/// Execute the edit command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: EditArgs,
) -> Result<()> {
    let url = format!("{}/api/v1/notes/{}", base_url, args.id);

    let request_body = UpdateNoteRequest {
        title: args.title,
        content: args.content,
        is_favorite: args.favorite,
    };

    let note: Note = make_request(client.put(&url).json(&request_body)).await?;

    if human {
        println!("{}", "Note updated.".green().bold());
        println!();
    }
    output(&note, human)
}
