mod analysis;
mod analyze;
mod inspect;
mod scan;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::scan::ScanArgs;

#[derive(Debug, Parser)]
#[command(name = "saasradar")]
#[command(about = "Find SaaS opportunities in Reddit discussions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the curated audiences
    Audiences,
    /// Classify a piece of text and show its signals and validation score
    Classify {
        text: String,

        #[arg(long, default_value_t = 0)]
        upvotes: u64,

        #[arg(long, default_value_t = 0)]
        comments: u64,
    },
    /// Search Reddit and write an opportunity report
    Scan(ScanArgs),
    /// Run the analysis pipeline over posts saved as JSON
    Analyze {
        /// JSON array of posts ({title, body, subreddit, upvotes, comments, ...})
        #[arg(long)]
        input: PathBuf,

        /// Audience whose name is used as AI context
        #[arg(long)]
        audience: Option<String>,

        /// Report path (defaults to a timestamped file in the results directory)
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long)]
        ai_analysis: bool,
    },
    /// Ask the AI collaborator to assess competition for a product idea
    Competition {
        #[arg(long)]
        idea: String,

        /// JSON array of posts used as evidence
        #[arg(long)]
        input: PathBuf,
    },
}

impl Commands {
    /// Whether the command reads environment configuration.
    fn needs_config(&self) -> bool {
        !matches!(self, Self::Classify { .. })
    }
}

const DEFAULT_LOG_LEVEL: &str = "info";

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("no command given; run `saasradar scan` or `saasradar --help`");
        return Ok(());
    };

    if !command.needs_config() {
        init_tracing(DEFAULT_LOG_LEVEL)?;
        if let Commands::Classify {
            text,
            upvotes,
            comments,
        } = command
        {
            inspect::run_classify(&text, upvotes, comments);
        }
        return Ok(());
    }

    let config = saasradar_core::load_app_config()?;
    init_tracing(&config.log_level)?;
    tracing::debug!(env = %config.env, "configuration loaded");

    match command {
        Commands::Audiences => inspect::run_audiences(&config)?,
        Commands::Classify {
            text,
            upvotes,
            comments,
        } => inspect::run_classify(&text, upvotes, comments),
        Commands::Scan(args) => scan::run_scan(&config, &args).await?,
        Commands::Analyze {
            input,
            audience,
            output,
            ai_analysis,
        } => {
            analyze::run_analyze(
                &config,
                &input,
                audience.as_deref(),
                output.as_deref(),
                ai_analysis,
            )
            .await?;
        }
        Commands::Competition { idea, input } => {
            analyze::run_competition(&config, &idea, &input).await?;
        }
    }

    Ok(())
}
