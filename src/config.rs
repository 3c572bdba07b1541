//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    error::Result,
    presentation::OutputMode,
    state::FontSize,
    time::{validate_and_combine, TimerDuration},
};

/// CLI argument parsing structure.
///
/// Every flag is optional; anything not given is asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "ppclock")]
#[command(about = "A movable countdown timer for presentations")]
#[command(version)]
pub struct Config {
    /// Countdown minutes (skips the duration prompts)
    #[arg(short, long)]
    pub minutes: Option<i64>,

    /// Additional countdown seconds, 0-59 (skips the duration prompts)
    #[arg(short, long)]
    pub seconds: Option<i64>,

    /// Display size: 12, 16, 24, 36 or small, medium, large, extra-large
    #[arg(short, long)]
    pub font_size: Option<FontSize>,

    /// Print events as JSON lines instead of the label
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Duration given on the command line, if any part of it was
    pub fn preset_duration(&self) -> Result<Option<TimerDuration>> {
        if self.minutes.is_none() && self.seconds.is_none() {
            return Ok(None);
        }
        validate_and_combine(self.minutes.unwrap_or(0), self.seconds.unwrap_or(0)).map(Some)
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimerError;

    fn parse_args(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("ppclock").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_means_fully_interactive() {
        let config = parse_args(&[]);
        assert_eq!(config.preset_duration().unwrap(), None);
        assert_eq!(config.font_size, None);
        assert_eq!(config.output_mode(), OutputMode::Text);
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn duration_flags_are_combined() {
        let config = parse_args(&["--minutes", "2", "-s", "5"]);
        assert_eq!(config.preset_duration().unwrap().unwrap().as_secs(), 125);

        let config = parse_args(&["--seconds", "30"]);
        assert_eq!(config.preset_duration().unwrap().unwrap().as_secs(), 30);
    }

    #[test]
    fn zero_duration_flags_are_rejected() {
        let config = parse_args(&["-m", "0"]);
        assert!(matches!(
            config.preset_duration(),
            Err(TimerError::InvalidDuration(_))
        ));
    }

    #[test]
    fn font_size_and_output_flags() {
        let config = parse_args(&["--font-size", "extra-large", "--json", "-v"]);
        assert_eq!(config.font_size, Some(FontSize::ExtraLarge));
        assert_eq!(config.output_mode(), OutputMode::Json);
        assert_eq!(config.log_level(), "debug");

        assert!(Config::try_parse_from(["ppclock", "--font-size", "20"]).is_err());
    }
}
