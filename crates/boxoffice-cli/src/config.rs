//! Command-line configuration.

use boxoffice_app::{InputPolicy, RuntimeConfig};
use boxoffice_core::{
    Layout, LayoutError, PricingPolicy,
    pricing::{BACK_PRICE, FRONT_PRICE, SMALL_ROOM_THRESHOLD},
};
use clap::Parser;
use thiserror::Error;

/// Invalid command-line configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Only one of `--rows` and `--seats` was given.
    #[error("--rows and --seats must be given together")]
    IncompleteLayout,

    /// Preconfigured dimensions are out of range.
    #[error("invalid auditorium: {0}")]
    Layout(#[from] LayoutError),
}

/// Cinema box office
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "boxoffice")]
#[command(about = "Interactive cinema seat reservation")]
#[command(version)]
pub struct Args {
    /// Number of rows; skips the dimension prompts when given with --seats
    #[arg(long)]
    pub rows: Option<u32>,

    /// Number of seats in each row
    #[arg(long)]
    pub seats: Option<u32>,

    /// Ticket price for front rows and small rooms
    #[arg(long, default_value_t = FRONT_PRICE)]
    pub front_price: u32,

    /// Ticket price for back rows of large rooms
    #[arg(long, default_value_t = BACK_PRICE)]
    pub back_price: u32,

    /// Capacity below which every seat costs the front price
    #[arg(long, default_value_t = SMALL_ROOM_THRESHOLD)]
    pub small_room_threshold: u64,

    /// Exit with an error on non-numeric input instead of asking again
    #[arg(long)]
    pub strict_input: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Build the runtime configuration.
    ///
    /// # Errors
    ///
    /// Fails if only one dimension is given or the dimensions are invalid.
    pub fn into_config(self) -> Result<RuntimeConfig, ConfigError> {
        let layout = match (self.rows, self.seats) {
            (Some(rows), Some(seats)) => Some(Layout::new(rows, seats)?),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteLayout),
        };

        let pricing = PricingPolicy {
            front_price: self.front_price,
            back_price: self.back_price,
            small_room_threshold: self.small_room_threshold,
        };
        let input_policy =
            if self.strict_input { InputPolicy::Abort } else { InputPolicy::Reprompt };

        Ok(RuntimeConfig { layout, pricing, input_policy })
    }
}
