//! Decorator demo: base delivery systems, then the same systems as express.
//!
//! Run with: cargo run --bin decorator_delivery

use std::error::Error;

use structural_patterns::decorator::{
    new_tracking_number, DeliverySystem, ExpressDelivery, StandardDelivery,
};
use structural_patterns::{init_tracing, DemoConfig};

fn show(system: &dyn DeliverySystem) {
    println!("Method: {}", system.description());
    println!("Cost: {:.2}", system.cost());
    println!("Delivery time: {} days", system.delivery_days());
}

fn show_express(system: &dyn DeliverySystem) {
    let Some(tracking) = system.as_tracking() else {
        return;
    };

    show(system);
    let number = new_tracking_number();
    println!("Tracking: {}", tracking.track_delivery(&number));
    println!("Express cost: {:.2}", tracking.express_cost());
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let config = DemoConfig::load_or_default(structural_patterns::config::CONFIG_FILE)?;

    println!("{}", config.heading("Base delivery methods"));
    for base in StandardDelivery::ALL {
        show(&base);
        println!();
    }

    println!("{}", config.heading("Express delivery via decorator"));
    let express: Vec<Box<dyn DeliverySystem>> = StandardDelivery::ALL
        .into_iter()
        .map(|base| Box::new(ExpressDelivery::new(base)) as Box<dyn DeliverySystem>)
        .collect();

    for system in &express {
        show_express(&**system);
    }

    Ok(())
}
