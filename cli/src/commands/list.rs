//! LIST command - List notes with search, filtering, sorting, and pagination.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, Note, format_timestamp, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Substring to search for (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Where to search: title, content, or both
    #[arg(long, value_name = "FIELD")]
    pub search_in: Option<String>,

    /// Only show favorites
    #[arg(long)]
    pub favorites: bool,

    /// Sort order: newest or oldest
    #[arg(long)]
    pub sort: Option<String>,

    /// Page number (1-based)
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Notes per page (1-100)
    #[arg(long)]
    pub per_page: Option<u32>,
}

/// Response from listing notes.
#[derive(Debug, Deserialize, Serialize)]
pub struct ListNotesResponse {
    pub notes: Vec<Note>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

impl HumanReadable for ListNotesResponse {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.notes.is_empty() {
            println!("  {}", "(No notes on this page)".dimmed());
        }

        for note in &self.notes {
            let star = if note.is_favorite {
                "*".yellow()
            } else {
                " ".normal()
            };

            println!("  {} {}", star, note.title.bold());
            println!("    {}", truncate(&note.content, 70).dimmed());
            println!("    {} {}", "ID:".cyan(), note.id);
            println!(
                "    {} {}",
                "Updated:".cyan(),
                format_timestamp(&note.updated_at)
            );
            println!();
        }

        println!(
            "  {} page {} ({} of {} total)",
            "Showing:".cyan(),
            self.page,
            self.notes.len(),
            self.total
        );
        println!();
        println!("  {}", "* = favorite".dimmed());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = format!("{}/api/v1/notes", base_url);

    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(search) = args.search {
        params.push(("search", search));
    }
    if let Some(scope) = args.search_in {
        params.push(("search_in", scope));
    }
    if args.favorites {
        params.push(("filter_by", "favorites".to_string()));
    }
    if let Some(sort) = args.sort {
        params.push(("sort_by", sort));
    }
    if let Some(page) = args.page {
        params.push(("page", page.to_string()));
    }
    if let Some(per_page) = args.per_page {
        params.push(("per_page", per_page.to_string()));
    }

    let response: ListNotesResponse = make_request(client.get(&url).query(&params)).await?;

    output(&response, human)
}
