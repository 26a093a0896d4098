//! Command-line interface parsing for Hourcast
//!
//! Defines the clap argument surface: the place name (given as one or more
//! words), the forecast timezone, and output controls.

use clap::Parser;

use crate::data::DEFAULT_TIMEZONE;

/// Hourcast - current conditions and hourly forecast for a place name
#[derive(Parser, Debug)]
#[command(name = "hourcast")]
#[command(about = "Look up current conditions and an hourly forecast for a place name")]
#[command(version)]
pub struct Cli {
    /// Place name to look up; multiple words are joined, so quoting is
    /// optional: `hourcast New York`
    #[arg(required = true, value_name = "PLACE")]
    pub place: Vec<String>,

    /// IANA timezone used for the forecast's hour labels
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Number of hourly rows to print (0 = snapshot only)
    #[arg(long, default_value_t = 12)]
    pub hours: usize,

    /// Print the full report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The place words joined back into a single query string.
    pub fn place_name(&self) -> String {
        self.place.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_single_word_place() {
        let cli = Cli::parse_from(["hourcast", "Ljubljana"]);
        assert_eq!(cli.place_name(), "Ljubljana");
    }

    #[test]
    fn test_cli_multi_word_place_is_joined() {
        let cli = Cli::parse_from(["hourcast", "New", "York"]);
        assert_eq!(cli.place_name(), "New York");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["hourcast", "Tokyo"]);
        assert_eq!(cli.timezone, DEFAULT_TIMEZONE);
        assert_eq!(cli.hours, 12);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_timezone_override() {
        let cli = Cli::parse_from(["hourcast", "Tokyo", "--timezone", "Asia/Tokyo"]);
        assert_eq!(cli.timezone, "Asia/Tokyo");
    }

    #[test]
    fn test_cli_hours_and_json_flags() {
        let cli = Cli::parse_from(["hourcast", "Tokyo", "--hours", "48", "--json"]);
        assert_eq!(cli.hours, 48);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_requires_a_place() {
        let result = Cli::try_parse_from(["hourcast"]);
        assert!(result.is_err());
    }
}
