//! Command-line interface definition using clap
//!
//! Provides structured argument parsing with automatic help generation.

use clap::Parser;
use std::path::PathBuf;

// =============================================================================
// CLI Definition
// =============================================================================

/// ADAS monitoring console: indicator lights and split video panels
#[derive(Parser, Debug, Default)]
#[command(name = "adas-console")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run without the TUI, printing display commands as JSON lines
    #[arg(long)]
    pub headless: bool,

    /// Config file to use (skips the default lookup)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible indicator sequence
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Stop the headless runner after N ticks
    #[arg(long, value_name = "N", requires = "headless")]
    pub ticks: Option<u64>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["adas-console"]);
        assert!(!cli.verbose);
        assert!(!cli.headless);
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["adas-console", "-v"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["adas-console", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_headless_run() {
        let cli = Cli::parse_from([
            "adas-console",
            "--headless",
            "--ticks",
            "10",
            "--seed",
            "42",
            "--config",
            "my.toml",
        ]);
        assert!(cli.headless);
        assert_eq!(cli.ticks, Some(10));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_cli_ticks_requires_headless() {
        assert!(Cli::try_parse_from(["adas-console", "--ticks", "3"]).is_err());
    }
}
