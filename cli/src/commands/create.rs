//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{Note, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Title for the new note
    pub title: String,

    /// Body text for the new note
    pub content: String,

    /// Mark the note as a favorite
    #[arg(long)]
    pub favorite: bool,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    title: String,
    content: String,
    is_favorite: bool,
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let url = format!("{}/api/v1/notes", base_url);

    let request_body = CreateNoteRequest {
        title: args.title,
        content: args.content,
        is_favorite: args.favorite,
    };

    let note: Note = make_request(client.post(&url).json(&request_body)).await?;

    if human {
        println!("{}", "Note created successfully!".green().bold());
        println!();
    }
    output(&note, human)
}
