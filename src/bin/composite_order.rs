//! Composite demo: price an order of nested boxes.
//!
//! Run with: cargo run --bin composite_order

use rust_decimal::Decimal;
use std::error::Error;

use structural_patterns::composite::{sample_order, OrderComponent};
use structural_patterns::{init_tracing, DemoConfig};

fn price_line(label: &str, amount: Decimal) -> String {
    format!("  {:<12} ${:.2}", label, amount)
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let config = DemoConfig::load_or_default(structural_patterns::config::CONFIG_FILE)?;

    let order = sample_order();

    println!("{}", config.heading("Order contents"));
    for component in order.components() {
        println!("{}", price_line(component.name(), component.price()));
    }

    let total = order.calculate_total();
    tracing::info!(%total, "order priced");
    println!("\n{}", price_line("Total", total));

    Ok(())
}
