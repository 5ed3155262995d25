//! Validate command - check framecurve files and report findings.

use std::path::{Path, PathBuf};

use colored::Colorize;
use framecurve::{Framecurve, ValidationReport, ValueFormat};

use crate::cli;

pub fn run(
    files: Vec<PathBuf>,
    json_output: bool,
    strict: bool,
    spec_url: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fc = Framecurve::with_config(cli::config(spec_url, ValueFormat::default()));

    let mut failed = 0;
    let mut json_reports = Vec::new();

    for file in &files {
        let report = match fc.validate_file(file) {
            Ok(report) => report,
            Err(e) => {
                // Unreadable files count as failures but do not stop the run.
                failed += 1;
                if json_output {
                    json_reports.push(serde_json::json!({
                        "file": file.display().to_string(),
                        "ok": false,
                        "perfect": false,
                        "error": e.to_string(),
                    }));
                } else {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                }
                continue;
            }
        };

        if !passes(&report, strict) {
            failed += 1;
        }

        if json_output {
            json_reports.push(serde_json::json!({
                "file": file.display().to_string(),
                "ok": report.ok(),
                "perfect": report.perfect(),
                "errors": report.errors,
                "warnings": report.warnings,
            }));
        } else {
            print_report(file, &report, verbose);
        }
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&json_reports)?);
    }

    if failed > 0 {
        return Err(format!("{} of {} files failed validation", failed, files.len()).into());
    }

    Ok(())
}

/// Whether a report counts as passing.
fn passes(report: &ValidationReport, strict: bool) -> bool {
    if strict {
        report.perfect()
    } else {
        report.ok()
    }
}

/// First line printed for a file: "<file>: ok" or "<file>: N errors, M warnings".
fn outcome_line(file: &Path, report: &ValidationReport) -> String {
    if report.perfect() {
        format!("{}: ok", file.display())
    } else {
        format!("{}: {}", file.display(), report.summary())
    }
}

fn print_report(file: &Path, report: &ValidationReport, verbose: bool) {
    let line = outcome_line(file, report);
    if report.perfect() {
        println!("{}", line.green());
    } else if report.ok() {
        println!("{}", line.yellow());
    } else {
        println!("{}", line.red().bold());
    }

    for e in &report.errors {
        println!("{} {}", "ERROR:".red().bold(), e);
    }
    for w in &report.warnings {
        println!("{} {}", "WARNING:".yellow(), w);
    }

    if verbose && report.perfect() {
        println!("  {}", "no findings".dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(errors: &[&str], warnings: &[&str]) -> ValidationReport {
        ValidationReport {
            filename: None,
            errors: errors.iter().map(|s| s.to_string()).collect(),
            warnings: warnings.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_outcome_line() {
        let path = Path::new("a.framecurve.txt");
        assert_eq!(outcome_line(path, &report(&[], &[])), "a.framecurve.txt: ok");
        assert_eq!(
            outcome_line(path, &report(&["bad"], &["meh", "meh"])),
            "a.framecurve.txt: 1 errors, 2 warnings"
        );
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let warned = report(&[], &["meh"]);
        assert!(passes(&warned, false));
        assert!(!passes(&warned, true));
        assert!(!passes(&report(&["bad"], &[]), false));
    }

    #[test]
    fn test_run_on_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.framecurve.txt");
        std::fs::write(
            &good,
            "# http://framecurve.org/specification-v1\r\n# at_frame\tuse_frame_of_source\r\n1\t1.00000\r\n",
        )
        .unwrap();
        let bad = dir.path().join("bad.txt");
        std::fs::write(&bad, "1\t1\r\n").unwrap();

        assert!(run(vec![good.clone()], true, true, None, false).is_ok());
        assert!(run(vec![good, bad], true, false, None, false).is_err());
    }
}
