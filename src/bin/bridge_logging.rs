//! Bridge demo: shop loggers writing to the console and to a log file.
//!
//! Run with: cargo run --bin bridge_logging
//!
//! File output goes to `log.txt` (or `log_file` from `patterns.toml`).
//! A failed append ends the process with an error.

use std::error::Error;

use structural_patterns::bridge::{
    ConsoleWriter, EcommerceLogger, FileWriter, Logger, MemoryWriter,
};
use structural_patterns::{init_tracing, DemoConfig};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let config = DemoConfig::load_or_default(structural_patterns::config::CONFIG_FILE)?;

    // Implementations
    let console = ConsoleWriter;
    let file = FileWriter::new(&config.log_file);

    // Abstractions bound to different implementations
    let order_logger = EcommerceLogger::new(&console, config.order_module.as_str());
    let user_logger = EcommerceLogger::new(&file, config.user_module.as_str());

    println!("{}", config.heading("Logging"));
    order_logger.log("New order #123")?;
    user_logger.log("User registered")?;

    // Swap the implementation behind the order logger
    let order_logger = order_logger.rebind(&file);
    order_logger.log("Order completed")?;

    tracing::info!(path = %file.path().display(), "file logging finished");
    println!(
        "Two more lines were appended to {}",
        file.path().display()
    );

    // Same abstraction again, this time over an in-memory implementation
    let audit = MemoryWriter::new();
    let audit_logger = user_logger.rebind(&audit);
    audit_logger.log("User profile updated")?;
    audit_logger.log("User logged out")?;

    println!("\n{}", config.heading("Captured in memory"));
    for line in audit.lines() {
        println!("{}", line);
    }

    Ok(())
}
