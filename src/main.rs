use clap::{Parser, Subcommand};
use colored::*;

mod api;
mod board;
mod config;
mod errors;
mod models;
mod render;

use board::group::GroupMode;
use board::sort::SortMode;
use board::state::BoardState;
use models::ticket::BoardSnapshot;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(version = "0.1.0")]
#[command(about = "Fetch a ticket feed and view it as a Kanban board", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the feed and render the board once
    Board {
        /// Grouping: status, user or priority (anything else shows one flat column)
        #[arg(long, default_value = "status")]
        group_by: String,

        /// Sorting within a column: priority or title (default keeps feed order)
        #[arg(long)]
        sort_by: Option<String>,

        /// Output the grouped columns as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Fetch once, then switch grouping and sorting interactively
    Interactive,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display current configuration
    Show,

    /// Set a specific configuration value
    Set {
        /// Configuration key (e.g., board.url)
        key: String,
        /// New value
        value: String,
    },

    /// Get the path to the config file
    Path,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Board {
            group_by,
            sort_by,
            json,
        } => handle_board(&group_by, sort_by.as_deref(), json).await,

        Commands::Interactive => handle_interactive().await,

        Commands::Config { action } => handle_config(action),
    };

    if let Err(e) = result {
        eprintln!("\n{}", e);
        std::process::exit(1);
    }
}

async fn handle_board(group_by: &str, sort_by: Option<&str>, json_output: bool) -> anyhow::Result<()> {
    use config::settings::Settings;

    let settings = Settings::load_or_default()?;

    let mut state = BoardState::new();
    state.set_grouping(GroupMode::parse(group_by));
    if let Some(sort_by) = sort_by {
        state.set_sorting(SortMode::parse(sort_by));
    }

    state.load(fetch_snapshot(&settings.board.url).await);

    let columns = state.columns();

    if json_output {
        let json = serde_json::to_string_pretty(&columns)?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", "Kanban Board".cyan().bold());
    println!(
        "{}",
        format!("  {} tickets", state.ticket_count()).dimmed()
    );
    println!();

    render::board::print_board(&columns, state.users());

    Ok(())
}

async fn handle_interactive() -> anyhow::Result<()> {
    use config::settings::Settings;
    use dialoguer::Select;

    let settings = Settings::load_or_default()?;

    let mut state = BoardState::new();
    state.load(fetch_snapshot(&settings.board.url).await);

    loop {
        println!("{}", "Kanban Board".cyan().bold());
        println!();
        render::board::print_board(&state.columns(), state.users());

        let actions = [
            "Group by Status",
            "Group by User",
            "Group by Priority",
            "Sort by Priority",
            "Sort by Title",
            "Quit",
        ];

        let selection = Select::new()
            .with_prompt("View options")
            .items(&actions)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => state.set_grouping(GroupMode::Status),
            Some(1) => state.set_grouping(GroupMode::User),
            Some(2) => state.set_grouping(GroupMode::Priority),
            Some(3) => state.set_sorting(SortMode::Priority),
            Some(4) => state.set_sorting(SortMode::Title),
            Some(_) | None => break,
        }

        println!();
    }

    Ok(())
}

/// The one fetch per run. A failed fetch is logged and degrades to an empty
/// snapshot, the board still renders.
async fn fetch_snapshot(feed_url: &str) -> BoardSnapshot {
    let client = api::board::BoardClient::new(feed_url.to_string());

    match client.fetch_board().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{}", format!("  Could not load the ticket feed: {}", e).yellow());
            eprintln!("{}", "    (Rendering an empty board)".dimmed());
            BoardSnapshot::default()
        }
    }
}

fn handle_config(action: ConfigAction) -> anyhow::Result<()> {
    use config::settings::Settings;

    match action {
        ConfigAction::Show => {
            let settings = Settings::load_or_default()?;

            println!("{}", "Current Configuration".cyan().bold());
            println!();
            println!("{}", "[board]".bold());
            println!("  {} {}", "url:".dimmed(), settings.board.url.bright_white());

            Ok(())
        }

        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load_or_default()?;

            match key.as_str() {
                "board.url" => settings.board.url = value.clone(),
                _ => {
                    return Err(anyhow::anyhow!(
                        "{}",
                        errors::BoardError::ConfigInvalid(format!(
                            "Unknown configuration key: {}",
                            key
                        ))
                    ))
                }
            }

            settings.save()?;

            println!("{}", format!("✓ Updated {} to: {}", key, value).green().bold());

            Ok(())
        }

        ConfigAction::Path => {
            let config_path = Settings::config_dir()?.join("config.toml");
            println!("{}", config_path.display());
            Ok(())
        }
    }
}
