//! Normalize command - rewrite a framecurve in canonical form.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use framecurve::{Curve, Framecurve, ReaderSource};

use crate::cli::{self, ValueStyle};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    values: ValueStyle,
    force: bool,
    spec_url: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fc = Framecurve::with_config(cli::config(spec_url, values.into()));

    let curve = read_curve(&fc, &file)?;

    let report = fc.validate_curve(&curve);
    if lists_errors(verbose, force) {
        for e in &report.errors {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
        }
    }
    if verbose {
        for w in &report.warnings {
            eprintln!("{} {}", "WARNING:".yellow(), w);
        }
    }

    let mut buffer = Vec::new();
    if force {
        fc.serialize(&mut buffer, &curve)?;
    } else {
        fc.validate_and_serialize(&mut buffer, &curve)?;
    }

    match output {
        Some(path) => {
            fs::write(&path, &buffer)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            tracing::info!(path = %path.display(), records = curve.len(), "wrote framecurve");
            if verbose {
                eprintln!(
                    "{} {}",
                    "Wrote".green().bold(),
                    path.display().to_string().white()
                );
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&buffer)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Without `--force` a failing curve is reported once, by the returned error.
fn lists_errors(verbose: bool, force: bool) -> bool {
    verbose || force
}

/// Parse the input file, or stdin when the path is "-".
fn read_curve(fc: &Framecurve, file: &Path) -> framecurve::Result<Curve> {
    if file.as_os_str() == "-" {
        let stdin = io::stdin();
        let mut source = ReaderSource::new(stdin.lock());
        fc.parse(&mut source)
    } else {
        fc.parse_file(file)
    }
}
