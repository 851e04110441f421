//! Boxoffice binary.
//!
//! # Usage
//!
//! ```bash
//! # Ask for the auditorium size interactively
//! boxoffice
//!
//! # Preconfigure a 9x9 room and abort on non-numeric input
//! boxoffice --rows 9 --seats 9 --strict-input
//! ```

use boxoffice_app::Runtime;
use boxoffice_cli::{Args, TerminalDriver};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    let config = args.into_config()?;
    tracing::info!(?config, "box office starting");

    let mut runtime = Runtime::new(TerminalDriver::stdio(), &config);
    runtime.run()?;

    Ok(())
}
