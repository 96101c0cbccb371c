use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use crate::commands;
use crate::models::Modal;
use crate::services::build_statement;

pub async fn execute(out: Option<PathBuf>) -> Result<(), String> {
    let mut controller = commands::build_controller(true)?;
    controller.load_dashboard().await?;
    controller.open_modal(Modal::DownloadHistory);

    let profile = controller
        .profile()
        .ok_or_else(|| "No profile data available".to_string())?;

    let document = build_statement(profile, controller.transactions(), Utc::now());

    let path = out.unwrap_or_else(|| PathBuf::from(format!("{}_statement.txt", profile.username)));
    std::fs::write(&path, document)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    controller.close_all_modals();
    info!("Statement exported to {}", path.display());
    println!("✅ Transaction history downloaded: {}", path.display());
    Ok(())
}
