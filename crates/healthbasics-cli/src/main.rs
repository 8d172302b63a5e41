//! healthbasics CLI — builds the site and drives the quiz and contact form.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "healthbasics",
    version,
    about = "Healthy Living Basics static site builder"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page to a static site directory
    Build {
        /// Output directory (default: from config, else ./site)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Content catalog TOML (default: built-in catalog)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the HTML for one route
    Page {
        /// Navigation path, e.g. "/nutrition"
        path: String,

        /// Content catalog TOML
        #[arg(long)]
        content: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the site's routes
    Routes,

    /// Validate a content catalog
    Validate {
        /// Content catalog TOML (default: built-in catalog)
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Take the nutrition quiz in the terminal
    Quiz {
        /// Content catalog TOML
        #[arg(long)]
        content: Option<PathBuf>,

        /// Scripted answers instead of prompting, e.g. "1=2,2=2" (question id = option number)
        #[arg(long)]
        answers: Option<String>,
    },

    /// Send a message through the contact form endpoint
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Override the configured endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and content catalog
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("healthbasics=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            output,
            content,
            config,
        } => commands::build::execute(output, content, config),
        Commands::Page {
            path,
            content,
            config,
        } => commands::page::execute(path, content, config),
        Commands::Routes => commands::routes::execute(),
        Commands::Validate { content } => commands::validate::execute(content),
        Commands::Quiz { content, answers } => commands::quiz::execute(content, answers),
        Commands::Contact {
            name,
            email,
            message,
            endpoint,
            config,
        } => commands::contact::execute(name, email, message, endpoint, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
