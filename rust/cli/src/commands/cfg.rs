//! `cfg`: prints the resolved configuration and where each value came from.
//!
//! ```json
//! {
//!   "initial_balance": { "value": 1000.0, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "initial_balance": {
            "value": config.initial_balance,
            "source": sources.initial_balance,
        },
        "house_edge": {
            "value": config.house_edge,
            "source": sources.house_edge,
        },
        "reveal_delay_ms": {
            "value": config.reveal_delay_ms,
            "source": sources.reveal_delay_ms,
        },
        "default_bet": {
            "value": config.default_bet,
            "source": sources.default_bet,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "early_cashout": {
            "value": config.early_cashout,
            "source": sources.early_cashout,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
