//! scala-facts CLI - build facts for Scala sources
//!
//! Walks the given files and directories, extracts each Scala file's
//! package, imports and exported symbols, and prints them. Diagnostics
//! and failures go to stderr so stdout stays machine-readable.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use scala_facts::project::{FileOutcome, collect_file_paths, extract_files};

/// Extract package, imports and exported symbols from Scala sources
///
/// Examples:
///   scala-facts src/main/scala          # Every .scala / .sc file below
///   scala-facts --json Foo.scala        # One file, JSON output
#[derive(Parser, Debug)]
#[command(name = "scala-facts")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Files or directories to extract
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Print results as a JSON array instead of text
    #[arg(long)]
    json: bool,

    /// Exit with status 1 when any diagnostic was produced
    #[arg(long)]
    fail_on_diagnostics: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut collect_failed = false;
    let mut files = Vec::new();
    for root in &cli.paths {
        match collect_file_paths(root) {
            Ok(paths) => files.extend(paths),
            Err(err) => {
                eprintln!("error: {err}");
                collect_failed = true;
            }
        }
    }

    let outcomes = extract_files(&files);
    let summary = report(&outcomes, cli.json);
    if let Some(output) = &summary.output {
        print!("{output}");
    }

    if collect_failed || summary.failed || (cli.fail_on_diagnostics && summary.diagnostics > 0) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// What one run produced, after diagnostics and failures went to stderr
#[derive(Debug, Default)]
struct Report {
    /// Text for stdout; `None` when rendering failed
    output: Option<String>,
    /// Diagnostics across all files
    diagnostics: usize,
    /// Of those, the ones with error severity
    errors: usize,
    /// A file failed fatally, or the results could not be rendered
    failed: bool,
}

/// Render successful results and send diagnostics and failures to stderr.
fn report(outcomes: &[FileOutcome], json: bool) -> Report {
    let mut report = Report::default();
    let mut results = Vec::new();

    for outcome in outcomes {
        match &outcome.result {
            Ok((result, diagnostics)) => {
                for diagnostic in diagnostics {
                    eprintln!("{}:{}", outcome.path.display(), diagnostic.format());
                }
                report.diagnostics += diagnostics.len();
                report.errors += diagnostics.iter().filter(|d| d.severity.is_error()).count();
                results.push(result);
            }
            Err(err) => {
                eprintln!("error: {err}");
                report.failed = true;
            }
        }
    }

    if report.diagnostics > 0 {
        eprintln!(
            "{} diagnostic(s), {} error(s) in {} file(s)",
            report.diagnostics,
            report.errors,
            outcomes.len()
        );
    }

    report.output = if json {
        match serde_json::to_string_pretty(&results) {
            Ok(text) => Some(format!("{text}\n")),
            Err(err) => {
                eprintln!("error: failed to serialize results: {err}");
                report.failed = true;
                None
            }
        }
    } else {
        Some(results.iter().map(|result| result.to_string()).collect())
    };
    report
}
