//! Adapter demo: a driver travels by car, then by saddled donkey.
//!
//! Run with: cargo run --bin adapter_transport

use std::error::Error;

use structural_patterns::adapter::{Animal, Car, Donkey, Driver, Saddle};
use structural_patterns::{init_tracing, DemoConfig};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let config = DemoConfig::load_or_default(structural_patterns::config::CONFIG_FILE)?;

    let driver = Driver;

    println!("{}", config.heading("Native transport"));
    println!("{}", driver.travel(&Car));

    println!("\n{}", config.heading("Adapted transport"));
    let donkey = Donkey;
    let saddle = Saddle::new(&donkey);
    println!("{}", driver.travel(&saddle));

    // The donkey is still just a donkey.
    println!("\n{}", config.heading("Original animal"));
    println!("{}", donkey.eat());

    Ok(())
}
