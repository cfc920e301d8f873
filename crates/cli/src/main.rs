//! Sitewright CLI: the main entry point.
//!
//! Commands:
//! - `plan`: Turn a project description into an execution plan
//! - `tokenize`: Print the code-point tokens of a text
//! - `detokenize`: Rebuild text from tokens
//! - `infer`: Run the inference simulator over a text
//! - `synthesize`: Combine new data with context in session memory
//! - `model`: Save or load model documents
//! - `config`: Show configuration

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "sitewright",
    about = "Sitewright: turn project descriptions into site-generation plans",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a project description into an execution plan
    Plan {
        /// The project description (English or Arabic)
        text: String,
    },

    /// Print the code-point tokens of a text
    Tokenize { text: String },

    /// Rebuild text from code-point tokens
    Detokenize {
        /// Tokens as decimal integers
        #[arg(required = true, num_args = 1..)]
        tokens: Vec<u32>,

        /// Fail on tokens that are not valid code points
        #[arg(long)]
        strict: bool,
    },

    /// Run the inference simulator over a text
    Infer {
        text: String,

        /// Override the simulated latency in milliseconds
        #[arg(long)]
        latency_ms: Option<u64>,
    },

    /// Combine new data with context, store it in session memory, and print the stored node
    Synthesize {
        /// New data (JSON, or plain text)
        new_data: String,

        /// Existing context (JSON, or plain text)
        context: String,

        /// Also save the synthesis as a model document with this name
        #[arg(long)]
        save_as: Option<String>,
    },

    /// Manage persisted model documents
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },

    /// Show configuration
    Config {
        /// Print the built-in defaults instead of the loaded config
        #[arg(long)]
        defaults: bool,
    },
}

#[derive(Subcommand)]
enum ModelAction {
    /// Save a JSON document under a name
    Save { name: String, json: String },
    /// Print the document stored under a name
    Load { name: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries JSON results, so logs go to stderr
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Plan { text } => commands::plan::run(&text).await?,
        Commands::Tokenize { text } => commands::tokens::tokenize(&text).await?,
        Commands::Detokenize { tokens, strict } => {
            commands::tokens::detokenize(&tokens, strict).await?
        }
        Commands::Infer { text, latency_ms } => commands::tokens::infer(&text, latency_ms).await?,
        Commands::Synthesize {
            new_data,
            context,
            save_as,
        } => commands::memory::synthesize(&new_data, &context, save_as.as_deref()).await?,
        Commands::Model { action } => match action {
            ModelAction::Save { name, json } => commands::model::save(&name, &json).await?,
            ModelAction::Load { name } => commands::model::load(&name).await?,
        },
        Commands::Config { defaults } => commands::config_cmd::show(defaults).await?,
    }

    Ok(())
}
