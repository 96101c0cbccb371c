use crate::commands;
use crate::services::COLLAPSED_LIST_LEN;
use crate::utils::{format_amount, format_signed, Align, Table};

pub async fn execute(show_all: bool) -> Result<(), String> {
    let mut controller = commands::build_controller(true)?;

    // A failed half-load is a notification, not a hard stop: whatever state
    // did arrive still gets rendered
    if let Err(e) = controller.load_dashboard().await {
        eprintln!("⚠️  {}", e);
    }
    if show_all {
        controller.toggle_show_all();
    }

    let profile = controller
        .profile()
        .ok_or_else(|| "No profile data available".to_string())?;

    println!("Welcome, {}", profile.full_name);
    println!("@{}  |  PIN {}", profile.username, if profile.pin_is_set { "set" } else { "not set" });
    println!();
    println!("Total Balance: {}", format_amount(profile.balance));
    println!();

    let displayed = controller.displayed_transactions();
    println!("Transaction History");
    if displayed.is_empty() {
        println!("  No transactions available.");
    } else {
        let mut table = Table::with_aligns(
            vec!["Type", "Description", "Date", "Amount"],
            vec![Align::Left, Align::Left, Align::Left, Align::Right],
        );
        for tx in displayed {
            let amount = match tx.amount.value() {
                Some(value) => format_signed(value, tx.kind.is_credit()),
                None => "--".to_string(),
            };
            table.add_row(vec![
                tx.kind.label().to_string(),
                tx.description.clone(),
                tx.occurred_at.format("%Y-%m-%d %H:%M").to_string(),
                amount,
            ]);
        }
        print!("{}", table.render());

        let total = controller.transactions().len();
        if !show_all && total > COLLAPSED_LIST_LEN {
            println!("... {} more (use --all to show everything)", total - COLLAPSED_LIST_LEN);
        }
    }

    let flow = controller.cash_flow();
    println!();
    println!("Cash Flow Overview");
    println!(
        "  Total Inflow:  {}",
        commands::colorize(&format_amount(flow.total_inflow), true)
    );
    println!(
        "  Total Outflow: {}",
        commands::colorize(&format_amount(flow.total_outflow), false)
    );

    Ok(())
}
