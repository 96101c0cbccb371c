//! Presentation layer: one file per command
//!
//! Commands render state and prompt for input; all business state lives in the
//! services layer. Every command reports its own failure as a printable
//! message.

pub mod dashboard;
pub mod fund;
pub mod login;
pub mod logout;
pub mod pin;
pub mod profile;
pub mod register;
pub mod send;
pub mod statement;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::api::wallet::WalletClient;
use crate::services::DashboardController;
use crate::session::SessionStore;

#[derive(Parser)]
#[command(name = "walletx", version, about = "Send money by username from your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new WalletX account
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
    },
    /// Show balance, transaction history and cash flow
    Dashboard {
        /// Show the full history instead of the latest entries
        #[arg(long)]
        all: bool,
    },
    /// Fund your own account
    Fund {
        /// Negative values parse here so the validation message can explain them
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Send money to another user by handle
    Send {
        recipient: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Set or update the transfer PIN
    SetPin,
    /// Edit your display name and profile picture
    EditProfile {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        picture: Option<PathBuf>,
    },
    /// Export the transaction history as a statement
    Statement {
        /// Output file, defaults to <username>_statement.txt
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Clear the stored session
    Logout,
}

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Register {
            full_name,
            username,
            email,
        } => register::execute(&full_name, &username, &email).await,
        Commands::Login { email } => login::execute(&email).await,
        Commands::Dashboard { all } => dashboard::execute(all).await,
        Commands::Fund { amount } => fund::execute(amount).await,
        Commands::Send { recipient, amount } => send::execute(&recipient, amount).await,
        Commands::SetPin => pin::execute().await,
        Commands::EditProfile { full_name, picture } => {
            profile::execute(&full_name, picture.as_deref()).await
        }
        Commands::Statement { out } => statement::execute(out).await,
        Commands::Logout => logout::execute().await,
    }
}

/// Build the API client, honoring the base URL override from the environment
pub(crate) fn client() -> WalletClient {
    match std::env::var("WALLETX_API_URL") {
        Ok(url) => WalletClient::with_base_url(url),
        Err(_) => WalletClient::new(),
    }
}

/// Build the dashboard controller with the stored session attached.
/// `require_auth` makes gated commands fail early with a friendly message.
pub(crate) fn build_controller(require_auth: bool) -> Result<DashboardController, String> {
    let store = SessionStore::open().map_err(|e| format!("Failed to open session store: {}", e))?;
    let session = store.load();

    if require_auth && session.is_none() {
        return Err("You are not logged in. Run `walletx login` first.".to_string());
    }

    let mut client = client();
    if let Some(session) = session {
        client = client.with_token(session.token);
    }

    Ok(DashboardController::new(Arc::new(client), store))
}

/// Read one line of input after printing a label
pub(crate) fn prompt(label: &str) -> Result<String, String> {
    print!("{}: ", label);
    std::io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    Ok(line.trim().to_string())
}

/// Green for credits, red for debits
pub(crate) fn colorize(text: &str, credit: bool) -> String {
    if credit {
        format!("\x1b[32m{}\x1b[0m", text)
    } else {
        format!("\x1b[31m{}\x1b[0m", text)
    }
}
