//! Layered configuration: built-in defaults, then a TOML file named by
//! `RIDEBUS_CONFIG`, then `RIDEBUS_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;

use ridebus_engine::engine::{CashOutPolicy, EngineConfig, INITIAL_BALANCE, REVEAL_DELAY};
use ridebus_engine::odds::HOUSE_EDGE;

pub const CONFIG_ENV: &str = "RIDEBUS_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub initial_balance: f64,
    pub house_edge: f64,
    /// Pause before each reveal in interactive play
    pub reveal_delay_ms: u64,
    pub default_bet: f64,
    pub seed: Option<u64>,
    /// Allow cash-out before the first correct guess
    pub early_cashout: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_balance: INITIAL_BALANCE,
            house_edge: HOUSE_EDGE,
            reveal_delay_ms: REVEAL_DELAY.as_millis() as u64,
            default_bet: 10.0,
            seed: None,
            early_cashout: false,
        }
    }
}

impl Config {
    /// Engine settings for a session. An explicit `seed` wins over the
    /// configured one.
    pub fn engine_config(&self, seed: Option<u64>) -> EngineConfig {
        EngineConfig {
            initial_balance: self.initial_balance,
            house_edge: self.house_edge,
            seed: seed.or(self.seed),
            cash_out: if self.early_cashout {
                CashOutPolicy::Anytime
            } else {
                CashOutPolicy::AfterFirstWin
            },
            gate_reveals: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub initial_balance: ValueSource,
    pub house_edge: ValueSource,
    pub reveal_delay_ms: ValueSource,
    pub default_bet: ValueSource,
    pub seed: ValueSource,
    pub early_cashout: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            initial_balance: ValueSource::Default,
            house_edge: ValueSource::Default,
            reveal_delay_ms: ValueSource::Default,
            default_bet: ValueSource::Default,
            seed: ValueSource::Default,
            early_cashout: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.initial_balance {
            cfg.initial_balance = v;
            sources.initial_balance = ValueSource::File;
        }
        if let Some(v) = f.house_edge {
            cfg.house_edge = v;
            sources.house_edge = ValueSource::File;
        }
        if let Some(v) = f.reveal_delay_ms {
            cfg.reveal_delay_ms = v;
            sources.reveal_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.default_bet {
            cfg.default_bet = v;
            sources.default_bet = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.early_cashout {
            cfg.early_cashout = v;
            sources.early_cashout = ValueSource::File;
        }
    }

    if let Some(v) = env_value("RIDEBUS_INITIAL_BALANCE") {
        cfg.initial_balance = parse_env(&v, "initial_balance")?;
        sources.initial_balance = ValueSource::Env;
    }
    if let Some(v) = env_value("RIDEBUS_HOUSE_EDGE") {
        cfg.house_edge = parse_env(&v, "house_edge")?;
        sources.house_edge = ValueSource::Env;
    }
    if let Some(v) = env_value("RIDEBUS_REVEAL_DELAY_MS") {
        cfg.reveal_delay_ms = parse_env(&v, "reveal_delay_ms")?;
        sources.reveal_delay_ms = ValueSource::Env;
    }
    if let Some(v) = env_value("RIDEBUS_DEFAULT_BET") {
        cfg.default_bet = parse_env(&v, "default_bet")?;
        sources.default_bet = ValueSource::Env;
    }
    if let Some(v) = env_value("RIDEBUS_SEED") {
        cfg.seed = Some(parse_env(&v, "seed")?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("RIDEBUS_EARLY_CASHOUT") {
        cfg.early_cashout = parse_bool(&v)
            .ok_or_else(|| ConfigError::Invalid("Invalid early_cashout".into()))?;
        sources.early_cashout = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    initial_balance: Option<f64>,
    #[serde(default)]
    house_edge: Option<f64>,
    #[serde(default)]
    reveal_delay_ms: Option<u64>,
    #[serde(default)]
    default_bet: Option<f64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    early_cashout: Option<bool>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(value: &str, key: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}", key)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(cfg.initial_balance.is_finite() && cfg.initial_balance > 0.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: initial_balance must be >0".into(),
        ));
    }
    if !(cfg.house_edge > 0.0 && cfg.house_edge <= 1.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: house_edge must be in (0, 1]".into(),
        ));
    }
    if !(cfg.default_bet.is_finite() && cfg.default_bet > 0.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: default_bet must be >0".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.initial_balance, 1000.0);
        assert_eq!(cfg.house_edge, 0.9);
        assert_eq!(cfg.reveal_delay_ms, 500);
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_edge() {
        for edge in [0.0, 1.5, f64::NAN] {
            let cfg = Config {
                house_edge: edge,
                ..Config::default()
            };
            assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn early_cashout_selects_anytime_policy() {
        let cfg = Config {
            early_cashout: true,
            seed: Some(3),
            ..Config::default()
        };
        let engine = cfg.engine_config(None);
        assert_eq!(engine.cash_out, CashOutPolicy::Anytime);
        assert_eq!(engine.seed, Some(3));
        assert_eq!(cfg.engine_config(Some(9)).seed, Some(9));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
