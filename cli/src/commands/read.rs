//! READ command - Retrieve a single note.

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use super::{Note, make_request, output};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Note ID to read
    pub id: Uuid,
}

/// Execute the read command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ReadArgs,
) -> Result<()> {
    let url = format!("{}/api/v1/notes/{}", base_url, args.id);

    let note: Note = make_request(client.get(&url)).await?;

    output(&note, human)
}
