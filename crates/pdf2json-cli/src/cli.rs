use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use pdf2json::{ConvertOptions, TableStrategy};

/// Read a PDF and print its text and tables as a single JSON object.
///
/// With no FILE, the PDF is read from standard input.
#[derive(Debug, Parser)]
#[command(name = "pdf2json", about, version)]
pub struct Cli {
    /// Path to the PDF file ('-' for standard input). Default: standard input
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Password for encrypted PDFs
    #[arg(long)]
    pub password: Option<String>,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = TableStrategyArg::Lattice)]
    pub strategy: TableStrategyArg,

    /// Use layout-preserving text extraction
    #[arg(long)]
    pub layout: bool,

    /// Pretty-print the JSON output instead of writing a single line
    #[arg(long)]
    pub pretty: bool,

    /// Log extraction progress to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The input file, or `None` when reading standard input.
    pub fn input_file(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| *p != Path::new("-"))
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            pages: self.pages.clone(),
            password: self.password.clone(),
            strategy: self.strategy.into(),
            layout: self.layout,
        }
    }
}

/// Table detection strategy for the CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TableStrategyArg {
    /// Use visible lines and rect edges
    Lattice,
    /// Use text alignment patterns
    Stream,
}

impl From<TableStrategyArg> for TableStrategy {
    fn from(arg: TableStrategyArg) -> Self {
        match arg {
            TableStrategyArg::Lattice => TableStrategy::Lattice,
            TableStrategyArg::Stream => TableStrategy::Stream,
        }
    }
}
