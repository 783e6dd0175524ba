use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use qmd_tidy::{NormalizeError, NormalizeOptions, ReplaceMode};

/// Collapse triple line breaks in every .qmd file of the current project.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Project root. Omit to search upward from the current directory.
    #[arg(long, value_name = "PATH")]
    root: Option<PathBuf>,

    /// File extension to process.
    #[arg(long, value_name = "EXT", default_value = qmd_tidy::DEFAULT_EXTENSION)]
    ext: String,

    /// Repeat the replacement until no run of three or more line breaks remains.
    #[arg(long)]
    until_stable: bool,

    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn build_options(cli: &Cli) -> NormalizeOptions {
    let mode = if cli.until_stable {
        ReplaceMode::UntilStable
    } else {
        ReplaceMode::SinglePass
    };

    NormalizeOptions {
        extension: cli.ext.trim_start_matches('.').to_string(),
        mode,
    }
}

fn report_error(err: &NormalizeError) {
    let cause = std::error::Error::source(err)
        .map(|s| format!(": {s}"))
        .unwrap_or_default();
    match err.path() {
        Some(path) => eprintln!("error: {}: {err}{cause}", path.display()),
        None => eprintln!("error: {err}{cause}"),
    }
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let options = build_options(&cli);

    let root = match cli.root {
        Some(root) => root,
        None => qmd_tidy::locate_project_root().map_err(|e| {
            report_error(&e);
            ExitCode::from(2)
        })?,
    };

    let report = qmd_tidy::normalize_tree(&root, &options).map_err(|e| {
        report_error(&e);
        ExitCode::from(1)
    })?;

    tracing::info!(
        files = report.files.len(),
        changed = report.changed.len(),
        "done"
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(code) => code,
    }
}
