//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use framecurve::{Dialect, FramecurveConfig, ValueFormat};

/// Framecurve: validate and normalize timewarp curves
#[derive(Parser)]
#[command(name = "framecurve")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Specification URL expected in the preamble
    #[arg(long, global = true, value_name = "URL")]
    pub spec_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check framecurve files and report errors and warnings
    Validate {
        /// Framecurve files to check
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output reports as JSON
        #[arg(long)]
        json: bool,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Rewrite a framecurve in canonical form
    Normalize {
        /// Framecurve file to read ("-" for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How source frame values are written
        #[arg(long, value_enum, default_value_t = ValueStyle::Fixed)]
        values: ValueStyle,

        /// Write the curve even if it has validation errors
        #[arg(long)]
        force: bool,
    },
}

/// Value rendering choice for normalize
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ValueStyle {
    /// Five decimal places (123.00000)
    Fixed,
    /// No trailing zeros (123, 2.4)
    Trimmed,
}

impl From<ValueStyle> for ValueFormat {
    fn from(style: ValueStyle) -> Self {
        match style {
            ValueStyle::Fixed => ValueFormat::Fixed,
            ValueStyle::Trimmed => ValueFormat::Trimmed,
        }
    }
}

/// Build the library configuration from global flags.
pub fn config(spec_url: Option<String>, value_format: ValueFormat) -> FramecurveConfig {
    let mut dialect = Dialect::default();
    if let Some(url) = spec_url {
        dialect = dialect.with_spec_url(url);
    }

    FramecurveConfig {
        dialect,
        value_format,
    }
}
