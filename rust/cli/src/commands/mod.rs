//! Command handlers, one module per subcommand.
//!
//! Every handler takes its output streams as `&mut dyn Write` and reports
//! failure through [`CliError`](crate::CliError); `run` turns that into the
//! exit code.

pub mod cfg;
pub mod odds;
pub mod play;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use odds::handle_odds_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
