use tracing::info;

use crate::api::wallet::WalletApi;
use crate::commands;
use crate::session::{Session, SessionStore};

pub async fn execute(email: &str) -> Result<(), String> {
    let password = commands::prompt("Password")?;

    let response = commands::client()
        .login(email, &password)
        .await
        .map_err(|e| e.to_string())?;

    let store = SessionStore::open().map_err(|e| format!("Failed to open session store: {}", e))?;
    store
        .save(&Session {
            token: response.token,
        })
        .map_err(|e| format!("Failed to store session: {}", e))?;

    info!("Logged in as {}", email);
    println!("✅ Login successful!");
    Ok(())
}
