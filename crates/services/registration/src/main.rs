//! Registration - command line front end for the user store.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use registration::config::UserServiceConfig;
use registration::{ListFormat, UserAction};

#[derive(Parser)]
#[command(name = "registration")]
#[command(about = "Local user registration store")]
struct Cli {
    /// SQLite file to use (defaults to REGISTRATION_DATABASE_PATH or users.db)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the user store if it does not exist
    Init,
    /// Register a new user
    Add {
        username: String,
        email: String,
        password: String,
    },
    /// Check a username and password
    Auth { username: String, password: String },
    /// Print all registered users
    List {
        /// Print JSON instead of one line per user
        #[arg(long)]
        json: bool,
    },
}

impl From<Commands> for UserAction {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Init => UserAction::Init,
            Commands::Add {
                username,
                email,
                password,
            } => UserAction::Add {
                username,
                email,
                password,
            },
            Commands::Auth { username, password } => {
                UserAction::Authenticate { username, password }
            }
            Commands::List { json } => UserAction::List {
                format: if json { ListFormat::Json } else { ListFormat::Text },
            },
        }
    }
}

impl Cli {
    /// Apply command line overrides on top of the environment configuration.
    fn apply_overrides(&self, config: &mut UserServiceConfig) {
        if let Some(path) = &self.database {
            config.database.path = path.clone();
        }
    }
}

/// Exit status for a finished command: 0 when accepted, 1 otherwise.
fn exit_status(result: &AppResult<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("error[{}]: {}", err.code(), err.user_message());
            1
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so listings on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = UserServiceConfig::from_env();
    cli.apply_overrides(&mut config);

    let mut out = io::stdout();
    let result = registration::run_command(&config, cli.command.into(), &mut out).await;
    ExitCode::from(exit_status(&result))
}
