use crate::domain::DEFAULT_UNIT_SECS;
use crate::ticker::{tick_duration, DEFAULT_TICK_MS};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const MIN_TICK_MS: u64 = 10;
pub const MAX_TICK_MS: u64 = 5000;

/// Largest accepted seconds-per-unit scale
pub const MAX_UNIT_SECS: u64 = 3600;

#[derive(Parser, Debug, Clone)]
#[command(name = "pomorks")]
#[command(version, about = "A terminal Pomodoro timer with a task list", long_about = None)]
pub struct Cli {
    /// Seconds per duration unit (WORK is 25 units, BREAK 5, LUNCH 30)
    #[arg(long, env = "POMORKS_UNIT_SECS", default_value_t = DEFAULT_UNIT_SECS)]
    pub unit_secs: u64,

    /// Milliseconds between timer ticks
    #[arg(long, env = "POMORKS_TICK_MS", default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Start the next phase's countdown as soon as the current one finishes
    #[arg(long, env = "POMORKS_AUTO_START")]
    pub auto_start: bool,

    /// Do not send desktop notifications when a phase finishes
    #[arg(long, env = "POMORKS_NO_NOTIFY")]
    pub no_notify: bool,

    /// Log filter directive (RUST_LOG takes precedence)
    #[arg(long, env = "POMORKS_LOG", default_value = "info")]
    pub log_level: String,

    /// Directory for log files. Defaults to the platform data directory.
    #[arg(long, env = "POMORKS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unit-secs must be at least 1")]
    ZeroUnit,

    #[error("unit-secs must be at most 3600, got {0}")]
    UnitTooLarge(u64),

    #[error("tick-ms must be between 10 and 5000, got {0}")]
    TickOutOfRange(u64),

    #[error("no log directory given and no platform data directory available")]
    NoLogDir,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub unit_secs: u64,
    pub tick_rate: Duration,
    pub auto_start: bool,
    pub notify: bool,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.unit_secs == 0 {
            return Err(ConfigError::ZeroUnit);
        }
        if cli.unit_secs > MAX_UNIT_SECS {
            return Err(ConfigError::UnitTooLarge(cli.unit_secs));
        }
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&cli.tick_ms) {
            return Err(ConfigError::TickOutOfRange(cli.tick_ms));
        }

        let log_dir = match cli.log_dir {
            Some(dir) => dir,
            None => default_log_dir().ok_or(ConfigError::NoLogDir)?,
        };

        Ok(Self {
            unit_secs: cli.unit_secs,
            tick_rate: tick_duration(cli.tick_ms),
            auto_start: cli.auto_start,
            notify: !cli.no_notify,
            log_level: cli.log_level,
            log_dir,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_secs: DEFAULT_UNIT_SECS,
            tick_rate: tick_duration(DEFAULT_TICK_MS),
            auto_start: false,
            notify: true,
            log_level: "info".to_string(),
            log_dir: default_log_dir().unwrap_or_else(|| PathBuf::from("logs")),
        }
    }
}

/// `<data_local_dir>/pomorks/logs`
fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("pomorks").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["pomorks"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_cli(parse(&["--log-dir", "/tmp/pomorks"])).unwrap();
        assert_eq!(config.unit_secs, 60);
        assert_eq!(config.tick_rate, Duration::from_millis(250));
        assert!(!config.auto_start);
        assert!(config.notify);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/pomorks"));
    }

    #[test]
    fn test_flags() {
        let config = Config::from_cli(parse(&[
            "--unit-secs",
            "1",
            "--tick-ms",
            "100",
            "--auto-start",
            "--no-notify",
            "--log-dir",
            "/tmp/pomorks",
        ]))
        .unwrap();
        assert_eq!(config.unit_secs, 1);
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert!(config.auto_start);
        assert!(!config.notify);
    }

    #[test]
    fn test_zero_unit_rejected() {
        let result = Config::from_cli(parse(&["--unit-secs", "0", "--log-dir", "/tmp"]));
        assert_eq!(result.unwrap_err(), ConfigError::ZeroUnit);
    }

    #[test]
    fn test_unit_upper_bound() {
        let config = Config::from_cli(parse(&["--unit-secs", "3600", "--log-dir", "/tmp"])).unwrap();
        assert_eq!(config.unit_secs, MAX_UNIT_SECS);

        let result = Config::from_cli(parse(&["--unit-secs", "3601", "--log-dir", "/tmp"]));
        assert_eq!(result.unwrap_err(), ConfigError::UnitTooLarge(3601));

        let result = Config::from_cli(parse(&[
            "--unit-secs",
            "18446744073709551615",
            "--log-dir",
            "/tmp",
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::UnitTooLarge(u64::MAX));
    }

    #[test]
    fn test_tick_range() {
        let result = Config::from_cli(parse(&["--tick-ms", "5", "--log-dir", "/tmp"]));
        assert_eq!(result.unwrap_err(), ConfigError::TickOutOfRange(5));

        let result = Config::from_cli(parse(&["--tick-ms", "9000", "--log-dir", "/tmp"]));
        assert_eq!(result.unwrap_err(), ConfigError::TickOutOfRange(9000));
    }
}
