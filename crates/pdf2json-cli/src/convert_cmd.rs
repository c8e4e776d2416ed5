use std::io::{self, Read};
use std::path::Path;

use pdf2json::{PlumberBackend, convert_with, write_json_line, write_json_pretty};
use tracing::debug;

use crate::cli::Cli;

/// Read the PDF, convert it, and print the JSON document.
///
/// Any failure prints an `Error: ...` line to stderr and returns `Err(1)`;
/// nothing is written to stdout in that case.
pub fn run(cli: &Cli) -> Result<(), i32> {
    let bytes = read_input(cli.input_file())?;
    debug!(bytes = bytes.len(), "read PDF input");

    let extraction = convert_with::<PlumberBackend>(&bytes, &cli.convert_options()).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    let stdout = io::stdout().lock();
    let written = if cli.pretty {
        write_json_pretty(stdout, &extraction)
    } else {
        write_json_line(stdout, &extraction)
    };
    written.map_err(|e| {
        eprintln!("Error: failed to write output: {e}");
        1
    })
}

/// Buffer the whole PDF as raw bytes from `file`, or from stdin when `None`.
fn read_input(file: Option<&Path>) -> Result<Vec<u8>, i32> {
    match file {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: file not found: {}", path.display());
                return Err(1);
            }
            std::fs::read(path).map_err(|e| {
                eprintln!("Error: failed to read {}: {e}", path.display());
                1
            })
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin().lock().read_to_end(&mut bytes).map_err(|e| {
                eprintln!("Error: failed to read standard input: {e}");
                1
            })?;
            Ok(bytes)
        }
    }
}
