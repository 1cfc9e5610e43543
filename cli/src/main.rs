//! Command-line interface for the Noteworthy notes service.
//!
//! This CLI tool provides commands for all note operations:
//! - list: List notes with search, filtering, sorting, and pagination
//! - create: Create new notes
//! - read: Retrieve a single note
//! - edit: Update fields of an existing note
//! - delete: Delete a note
//!
//! Configuration via environment:
//! - NOTEWORTHY_URL: Base URL of the server (default: http://localhost:3000)
//! - NOTEWORTHY_TOKEN: JWT Bearer token for authentication

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, edit::EditArgs, list::ListArgs, read::ReadArgs,
};

/// Noteworthy CLI
///
/// Interact with your notes from the command line. Designed for both
/// scripting (JSON output) and humans (--human flag for formatted output).
#[derive(Parser)]
#[command(name = "noteworthy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Noteworthy server URL
    #[arg(
        long,
        env = "NOTEWORTHY_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    /// JWT Bearer token for authentication
    #[arg(long, env = "NOTEWORTHY_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List notes with search, filtering, sorting, and pagination
    List(ListArgs),

    /// Create a new note
    Create(CreateArgs),

    /// Read a single note
    Read(ReadArgs),

    /// Edit fields of an existing note
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Create(args) => {
            commands::create::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Read(args) => commands::read::execute(&client, &cli.url, cli.human, args).await,
        Commands::Edit(args) => commands::edit::execute(&client, &cli.url, cli.human, args).await,
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
