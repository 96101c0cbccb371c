use crate::commands;
use crate::utils::format_amount;

pub async fn execute(amount: f64) -> Result<(), String> {
    let mut controller = commands::build_controller(true)?;

    let new_balance = controller.fund_account(amount).await?;
    println!("✅ Wallet funded successfully!");
    println!("New balance: {}", format_amount(new_balance));
    Ok(())
}
