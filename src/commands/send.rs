use crate::commands;
use crate::models::Modal;
use crate::utils::format_amount;

/// The send-money wizard: capture recipient and amount, then prompt for the
/// PIN. A rejected PIN keeps the transfer pending so the user retries without
/// re-entering anything; an empty input abandons it.
pub async fn execute(recipient: &str, amount: f64) -> Result<(), String> {
    let mut controller = commands::build_controller(true)?;

    // Balance display is best-effort; the transfer itself needs no preload
    if let Err(e) = controller.load_dashboard().await {
        tracing::warn!("Dashboard preload failed: {}", e);
    }

    controller.open_modal(Modal::SendMoney);
    controller.initiate_send_money(recipient, amount)?;

    println!("Sending {} to @{}", format_amount(amount), recipient);

    loop {
        let pin = commands::prompt("Enter your PIN (empty to cancel)")?;
        if pin.is_empty() {
            controller.close_all_modals();
            println!("Transfer cancelled.");
            return Ok(());
        }

        match controller.confirm_pin(&pin).await {
            Ok(message) => {
                println!("✅ {}", message);
                if let Some(profile) = controller.profile() {
                    println!("New balance: {}", format_amount(profile.balance));
                }
                return Ok(());
            }
            Err(e) => {
                // Inline error, the wizard stays open for another attempt
                eprintln!("❌ {}", e);
            }
        }
    }
}
