use tracing::info;

use crate::api::wallet::{RegisterRequest, WalletApi};
use crate::commands;
use crate::session::{Session, SessionStore};

pub async fn execute(full_name: &str, username: &str, email: &str) -> Result<(), String> {
    let password = commands::prompt("Password")?;
    let confirm = commands::prompt("Confirm password")?;

    // Local checks before touching the network
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    let request = RegisterRequest {
        full_name: full_name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password,
    };

    let response = commands::client()
        .register(&request)
        .await
        .map_err(|e| e.to_string())?;

    let store = SessionStore::open().map_err(|e| format!("Failed to open session store: {}", e))?;
    store
        .save(&Session {
            token: response.token,
        })
        .map_err(|e| format!("Failed to store session: {}", e))?;

    // The server is authoritative for the stored handle
    let handle = response.username.as_deref().unwrap_or(username);
    let display = response.full_name.as_deref().unwrap_or(full_name);
    info!("Registered account @{}", handle);
    println!("✅ Account created successfully! Welcome, {} (@{}).", display, handle);
    Ok(())
}
