//! Structural Patterns - Runnable Examples
//!
//! Four independent demonstrations of the classic structural patterns:
//!
//! - [`adapter`]: a saddle turns a donkey into something a driver can ride.
//! - [`bridge`]: loggers (abstraction) write through interchangeable writers
//!   (implementation).
//! - [`composite`]: products packed into nested boxes, priced recursively.
//! - [`decorator`]: express delivery wrapped around any delivery system.
//!
//! Run any demo with:
//! ```bash
//! cargo run --bin <demo_name>
//! ```
//!
//! The modules do not depend on each other; only [`error`] and [`config`]
//! are shared.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod error;

pub use config::DemoConfig;
pub use error::PatternError;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber used by every demo binary.
///
/// Logs go to stderr so stdout carries only the demo output. The filter
/// defaults to `warn` and can be raised with `RUST_LOG=debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init only fails when a global subscriber is already set; that one stays.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
