use crate::commands;

pub async fn execute() -> Result<(), String> {
    let mut controller = commands::build_controller(false)?;
    controller.logout()?;
    println!("✅ Logged out.");
    Ok(())
}
