//! # sheetlens-cli
//!
//! Command-line interface for sheetlens: converts spreadsheet workbooks
//! into a structured JSON document on stdout.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use sheetlens_core::{inspect_file, InspectError, InspectOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sheetlens - spreadsheet workbooks as machine-readable JSON
#[derive(Parser)]
#[command(name = "sheetlens")]
#[command(author, version, about = "Convert .xlsx/.xlsm workbooks to structured JSON", long_about = None)]
struct Cli {
    /// Spreadsheet file to inspect (.xlsx or .xlsm)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Only process the named sheet
    #[arg(long, value_name = "NAME")]
    sheet: Option<String>,

    /// Only return structure (headers, counts) without row data
    #[arg(long = "headers-only")]
    headers_only: bool,

    /// Limit output to N rows per sheet (useful for previews)
    #[arg(long, value_name = "N")]
    limit: Option<String>,

    /// Output unformatted single-line JSON
    #[arg(long)]
    raw: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Invoked with no arguments at all: show usage instead of an error.
    if std::env::args().len() <= 1 {
        Cli::parse_from(["sheetlens", "--help"]);
        return;
    }

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let file = cli.file.as_ref().ok_or(InspectError::MissingFileArgument)?;
    let options = resolve_options(cli);

    let report = inspect_file(file, &options)?;
    println!("{}", report.to_json_string()?);

    Ok(())
}

/// Derive effective processing options from parsed arguments.
fn resolve_options(cli: &Cli) -> InspectOptions {
    InspectOptions {
        target_sheet: cli.sheet.clone(),
        headers_only: cli.headers_only,
        row_limit: resolve_row_limit(cli.limit.as_deref()),
        raw_output: cli.raw,
    }
}

/// Lenient `--limit` parsing: a value that does not parse as a positive
/// integer disables the limit instead of failing the run.
fn resolve_row_limit(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parse_file_and_flags() {
        let cli = Cli::parse_from([
            "sheetlens",
            "data.xlsx",
            "--sheet",
            "Stock",
            "--headers-only",
            "--limit",
            "10",
            "--raw",
        ]);

        assert_eq!(cli.file, Some(PathBuf::from("data.xlsx")));
        assert_eq!(cli.sheet, Some("Stock".to_string()));
        assert!(cli.headers_only);
        assert_eq!(cli.limit, Some("10".to_string()));
        assert!(cli.raw);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["sheetlens", "data.xlsx"]);

        assert_eq!(cli.file, Some(PathBuf::from("data.xlsx")));
        assert!(cli.sheet.is_none());
        assert!(!cli.headers_only);
        assert!(cli.limit.is_none());
        assert!(!cli.raw);
    }

    #[test]
    fn test_resolve_row_limit_lenient() {
        assert_eq!(resolve_row_limit(Some("10")), Some(10));
        assert_eq!(resolve_row_limit(Some(" 3 ")), Some(3));
        // Malformed or non-positive values disable the limit, never error.
        assert_eq!(resolve_row_limit(Some("abc")), None);
        assert_eq!(resolve_row_limit(Some("0")), None);
        assert_eq!(resolve_row_limit(Some("-5")), None);
        assert_eq!(resolve_row_limit(Some("")), None);
        assert_eq!(resolve_row_limit(None), None);
    }

    #[test]
    fn test_resolve_options() {
        let cli = Cli::parse_from(["sheetlens", "data.xlsx", "--limit", "nope", "--raw"]);
        let options = resolve_options(&cli);

        assert!(options.target_sheet.is_none());
        assert!(!options.headers_only);
        assert!(options.row_limit.is_none());
        assert!(options.raw_output);
    }

    #[test]
    fn test_run_missing_file_argument() {
        let cli = Cli::parse_from(["sheetlens", "--headers-only"]);
        let err = run(&cli).unwrap_err();
        assert!(err
            .downcast_ref::<InspectError>()
            .is_some_and(|e| matches!(e, InspectError::MissingFileArgument)));
    }

    #[test]
    fn test_run_file_not_found() {
        let cli = Cli::parse_from(["sheetlens", "/no/such/file.xlsx"]);
        let err = run(&cli).unwrap_err();
        assert!(err
            .downcast_ref::<InspectError>()
            .is_some_and(|e| matches!(e, InspectError::FileNotFound { .. })));
    }

    #[test]
    fn test_run_succeeds_on_real_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ok.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Name").unwrap();
        worksheet.write_string(1, 0, "Ana").unwrap();
        workbook.save(&path).unwrap();

        let cli = Cli::parse_from(["sheetlens", path.to_str().unwrap(), "--raw"]);
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn test_run_unknown_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("one.xlsx");

        let mut workbook = Workbook::new();
        workbook.add_worksheet().set_name("Only").unwrap();
        workbook.save(&path).unwrap();

        let cli = Cli::parse_from(["sheetlens", path.to_str().unwrap(), "--sheet", "Other"]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("Only"));
    }
}
