use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use trellis::theme::ThemeMode;

/// Interactive demo of the trellis input field and data table.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct DemoConfig {
    /// Start with the dark theme
    #[arg(long)]
    pub dark: bool,

    /// Minimum level written to the log file
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log file path (defaults to latest.log in the cache directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl DemoConfig {
    pub fn theme_mode(&self) -> ThemeMode {
        if self.dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DemoConfig::try_parse_from(["trellis-demo"]).expect("parses");
        assert_eq!(config.theme_mode(), ThemeMode::Light);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn flags() {
        let config = DemoConfig::try_parse_from([
            "trellis-demo",
            "--dark",
            "--log-level",
            "trace",
            "--log-file",
            "/tmp/demo.log",
        ])
        .expect("parses");
        assert_eq!(config.theme_mode(), ThemeMode::Dark);
        assert_eq!(LevelFilter::from(config.log_level), LevelFilter::Trace);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/demo.log")));
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(DemoConfig::try_parse_from(["trellis-demo", "--log-level", "loud"]).is_err());
    }
}
