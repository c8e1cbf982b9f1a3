use std::io::BufRead;
use std::path::PathBuf;

use admin_login::{AppConfig, ConsoleNavigator, FileTokenStore, HttpAuthApi};
use anyhow::Context;
use clap::{Parser, Subcommand};
use shared::{LoginFlow, LoginState, TokenStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ============================================================================
// CLI
// ============================================================================

#[derive(Parser)]
#[command(name = "admin-login")]
#[command(about = "Headless client for the admin portal login")]
struct Cli {
    /// API base URL (overrides API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// File the admin token is kept in (overrides ADMIN_TOKEN_FILE)
    #[arg(long, global = true)]
    token_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the admin token
    Login {
        #[arg(long, default_value = "")]
        username: String,
        /// Read from the first line of stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Print the stored admin token
    Token,
    /// Remove the stored admin token
    Logout,
}

fn read_password() -> anyhow::Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(cli.api_url, cli.token_file);
    let store = FileTokenStore::new(&config.token_file);

    match cli.command {
        Commands::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => read_password()?,
            };

            let api = HttpAuthApi::new(&config.api_url);
            tracing::info!(endpoint = api.endpoint(), "logging in");

            let flow = LoginFlow::new(api, &store, ConsoleNavigator);
            let attempt = flow.login(&username, &password).await;

            if let LoginState::Error(message) = attempt.state() {
                anyhow::bail!("{}", message);
            }
        }

        Commands::Token => match store.get() {
            Some(token) => println!("{}", token),
            None => anyhow::bail!("No admin token stored in {}", store.path().display()),
        },

        Commands::Logout => {
            store.clear();
            println!("Removed admin token from {}", store.path().display());
        }
    }

    Ok(())
}
