use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::hlt::error::{HaliteError, Result};

/// Sends `tracing` output to `log_<player id>.txt`. Stdout belongs to the
/// engine, so nothing may be logged there.
pub fn init(player_id: usize, filter: &str) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(format!("log_{}.txt", player_id))?;
    let filter = EnvFilter::try_new(filter).map_err(|e| HaliteError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| HaliteError::Logging(e.to_string()))
}
