use crate::commands;
use crate::models::Modal;

pub async fn execute() -> Result<(), String> {
    let mut controller = commands::build_controller(true)?;

    controller.open_modal(Modal::SetPin);
    let new_pin = commands::prompt("New PIN")?;
    let confirm = commands::prompt("Confirm PIN")?;

    controller.set_pin(&new_pin, &confirm).await?;
    println!("✅ PIN set successfully!");
    Ok(())
}
