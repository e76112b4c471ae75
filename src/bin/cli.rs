use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nba2k_ratings::{store, Config, PlayerRecord, RatingsClient};

/// Look up NBA 2K player ratings from 2kratings.com.
#[derive(Parser, Debug)]
#[command(name = "nba2k-ratings", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for a player by name.
    Search {
        /// Player name, e.g. "Stephen Curry".
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Directory the JSON record is written to.
        #[arg(long, default_value = "output")]
        output: PathBuf,
        /// Print the record without saving it.
        #[arg(long)]
        no_save: bool,
    },
    /// Extract a record from a saved markdown page.
    Parse {
        file: PathBuf,
        /// Directory the JSON record is written to; not saved when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Search {
            name,
            output,
            no_save,
        } => {
            let name = name.join(" ");
            let config = Config::from_env().context("failed to load configuration")?;
            let client = RatingsClient::new(config);

            let Some(record) = client.search(&name).await else {
                println!("No player found for {name}");
                return Ok(ExitCode::FAILURE);
            };
            report(&record, (!no_save).then_some(output))?;
        }
        Command::Parse { file, output } => {
            let record = nba2k_ratings::parse_local_file(&file)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            report(&record, output)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn report(record: &PlayerRecord, output: Option<PathBuf>) -> anyhow::Result<()> {
    print!("{record}");
    if let Some(dir) = output {
        let path = store::save_record(record, &dir)?;
        info!(path = %path.display(), "saved player record");
        println!("  Data saved to: {}", path.display());
    }
    Ok(())
}
