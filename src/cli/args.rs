//! Command-line argument definitions using clap derive.

use crate::config::Config;
use crate::error::ConfigResult;
use clap::Parser;
use std::path::PathBuf;

/// Contact book - an interactive assistant for contacts and birthdays
#[derive(Parser, Debug, Default)]
#[command(name = "contact-book")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address book file (overrides CONTACT_BOOK_PATH)
    #[arg(long, value_name = "PATH")]
    pub book: Option<PathBuf>,

    /// Birthday lookahead in days (overrides BIRTHDAY_WINDOW_DAYS)
    #[arg(long, value_name = "DAYS")]
    pub window: Option<u32>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Apply flags on top of the environment configuration.
    pub fn apply(&self, mut config: Config) -> ConfigResult<Config> {
        if let Some(ref book) = self.book {
            config.book_path = book.clone();
        }
        if let Some(window) = self.window {
            Config::validate_window("--window", window)?;
            config.birthday_window_days = window;
        }
        if self.debug {
            config.log_level = "debug".to_string();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "contact-book",
            "--book",
            "b.json",
            "--window",
            "3",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.book, Some(PathBuf::from("b.json")));
        assert_eq!(cli.window, Some(3));
        assert!(cli.debug);
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = Cli {
            book: Some(PathBuf::from("other.json")),
            window: Some(10),
            debug: true,
        };
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config.book_path, PathBuf::from("other.json"));
        assert_eq!(config.birthday_window_days, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let config = Cli::default().apply(Config::default()).unwrap();
        assert_eq!(config.book_path, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_window_days, 7);
    }

    #[test]
    fn test_apply_rejects_large_window() {
        let cli = Cli {
            window: Some(1000),
            ..Default::default()
        };
        assert!(cli.apply(Config::default()).is_err());
    }
}
