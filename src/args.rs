use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tailwind Safelist CLI - Validates scan configurations and applies safelist rules
#[derive(Parser, Debug)]
#[command(name = "tailwind-safelist-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate a scan configuration file
    Check(CheckArgs),
    /// Filter candidate class names from stdin through a safelist
    Filter(FilterArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        required = true,
        help = "Path to the scan configuration file"
    )]
    pub config: PathBuf,

    /// Accept configurations with an empty content list
    #[arg(
        long = "allow-empty-content",
        default_value_t = false,
        help = "Do not fail when the content list is empty (zero-coverage scan)"
    )]
    pub allow_empty_content: bool,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

/// Arguments for the filter command
#[derive(Parser, Debug, Clone)]
pub struct FilterArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to the scan configuration file; without it nothing is preserved"
    )]
    pub config: Option<PathBuf>,

    /// Report file path (JSON)
    #[arg(
        short = 'r',
        long = "report",
        value_name = "PATH",
        help = "Path where a JSON evaluation report will be written"
    )]
    pub report: Option<PathBuf>,

    /// Write the report compactly
    #[arg(
        long = "compact",
        default_value_t = false,
        help = "Write the report as compact JSON instead of pretty-printed"
    )]
    pub compact: bool,
}

impl FilterArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.compact && self.report.is_none() {
            return Err("--compact has no effect without --report".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_requires_report() {
        let args = FilterArgs {
            config: None,
            report: None,
            compact: true,
        };
        assert!(args.validate().is_err());

        let args = FilterArgs {
            config: None,
            report: Some(std::path::PathBuf::from("report.json")),
            compact: true,
        };
        assert!(args.validate().is_ok());
    }
}
