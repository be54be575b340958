pub mod args;
pub mod config;
pub mod errors;
pub mod matcher;
pub mod report;
pub mod safelist;

pub use args::{CheckArgs, Cli, Commands, FilterArgs};
pub use config::{PatternEntry, SafelistEntry, ScanConfig, ThemeConfig};
pub use errors::{Result, SafelistError};
pub use matcher::ClassMatcher;
pub use report::{ClassDecision, SafelistReport};
pub use safelist::{Safelist, SafelistRule};

use std::path::Path;

/// Summary of a validated configuration, as reported by `check`
#[derive(Debug)]
pub struct CheckOutcome {
    pub config: ScanConfig,
    pub content_globs: usize,
    pub safelist_rules: usize,
    pub plugins: usize,
}

/// Load and validate a configuration file.
///
/// A structurally valid configuration with an empty content list is rejected
/// here unless explicitly allowed: a scanner with no sources can never
/// safelist anything meaningful, so the build should stop before any scan.
pub fn check(args: &CheckArgs) -> Result<CheckOutcome> {
    let config = ScanConfig::load(&args.config)?;

    if config.is_zero_coverage() && !args.allow_empty_content {
        return Err(SafelistError::ConfigError {
            message: format!(
                "{}: content is empty; the scanner would match no files",
                args.config.display()
            ),
        });
    }

    if args.verbose {
        eprintln!("Validated {}", args.config.display());
        eprintln!("  content globs: {}", config.content.len());
        eprintln!("  safelist rules: {}", config.safelist.len());
        eprintln!("  plugins: {}", config.plugins.len());
    }

    Ok(CheckOutcome {
        content_globs: config.content.len(),
        safelist_rules: config.safelist.len(),
        plugins: config.plugins.len(),
        config,
    })
}

/// Split stdin-style input into candidate class names.
///
/// Candidates are whitespace-separated; blank runs are skipped. Order is
/// kept, duplicates are left in (the safelist and report dedupe downstream).
pub fn split_candidates(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Write file atomically by writing to temp file then renaming
fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> std::io::Result<()> {
    use std::fs;
    use std::io::Write;

    let path = path.as_ref();
    let temp_path = path.with_extension(".tmp");

    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Handle the filter command - read candidate class names from stdin, write
/// the preserved subset to stdout, one per line.
#[cfg(feature = "cli")]
pub async fn handle_filter_command(args: FilterArgs) -> Result<()> {
    use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

    args.validate().map_err(SafelistError::InputError)?;

    let config = match &args.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };
    let safelist = Safelist::compile(&config)?;

    let mut input = String::new();
    let mut stdin = io::stdin();
    stdin
        .read_to_string(&mut input)
        .await
        .map_err(|e| SafelistError::InputError(format!("Failed to read from stdin: {}", e)))?;

    let candidates = split_candidates(&input);
    let preserved = safelist.preserved(candidates.iter().copied());

    let mut stdout = io::stdout();
    for class in &preserved {
        stdout
            .write_all(class.as_bytes())
            .await
            .map_err(|e| SafelistError::OutputError {
                path: "stdout".to_string(),
                message: e.to_string(),
            })?;
        stdout
            .write_all(b"\n")
            .await
            .map_err(|e| SafelistError::OutputError {
                path: "stdout".to_string(),
                message: e.to_string(),
            })?;
    }

    stdout.flush().await.map_err(|e| SafelistError::OutputError {
        path: "stdout".to_string(),
        message: e.to_string(),
    })?;

    if let Some(report_path) = &args.report {
        let report = SafelistReport::evaluate(&safelist, candidates.iter().copied());
        let content = if args.compact {
            report.to_compact_json()?
        } else {
            report.to_pretty_json()?
        };

        if let Some(parent) = report_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        write_atomic(report_path, &content).map_err(|e| SafelistError::OutputError {
            path: report_path.display().to_string(),
            message: e.to_string(),
        })?;
    }

    Ok(())
}
