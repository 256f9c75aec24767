//! interp - Command-line entry point for the EAP pseudocode interpreter.
//!
//! `interp <file> [--debug]` parses and executes a source file against
//! standard input/output (§6 "External interfaces"). Source encoding,
//! console presentation, and debug logging live here because the
//! evaluator itself only consumes decoded Unicode text and a line-oriented
//! input provider (§1 "Out of scope").

mod error;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eapc_util::Handler;
use error::{DrvError, Result};

/// interp - run an EAP pseudocode program.
#[derive(Parser, Debug)]
#[command(name = "interp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parses and executes an EAP pseudocode source file")]
struct Cli {
    /// Source file to run.
    file: PathBuf,

    /// Print diagnostic [DEBUG] lines and full backtraces on internal errors.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli.file, cli.debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug { EnvFilter::new("debug") } else { EnvFilter::new("warn") };
    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .with_level(false)
        .without_time();
    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}

fn run(path: &PathBuf, debug: bool) -> Result<()> {
    let bytes = std::fs::read(path).map_err(|source| DrvError::ReadSource {
        path: path.display().to_string(),
        source,
    })?;
    let source = decode_source(&bytes);
    tracing::debug!("[DEBUG] loaded source file ({} bytes)", bytes.len());

    let mut handler = Handler::new();
    let program = eapc_par::parse(&source, &mut handler);
    if handler.has_errors() {
        let message = handler.first_error().map(ToString::to_string).unwrap_or_default();
        return Err(DrvError::Syntax(message));
    }
    let program = program.expect("no errors implies a parsed program");
    tracing::debug!("[DEBUG] parsed program ({} subroutines)", program.subroutines.len());

    let stdin = io::stdin();
    let mut input = eapc_eval::io::BufReadInput::new(stdin.lock());
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    match eapc_eval::run(&program, &mut input, &mut stdout, &mut stderr) {
        Ok(()) => Ok(()),
        Err(err) => {
            if debug {
                tracing::debug!(
                    "[DEBUG] runtime error backtrace:\n{}",
                    std::backtrace::Backtrace::force_capture()
                );
            }
            Err(err.into())
        }
    }
}

/// Decodes the source file per §6 "Source encoding": accept UTF-8; if the
/// byte stream fails UTF-8 validation or the decoded text doesn't contain
/// the ALGORITHM keyword, retry as Windows-1253; otherwise fall back to
/// lossy UTF-8.
fn decode_source(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        if contains_algorithm_keyword(text) {
            return text.to_owned();
        }
    }
    let (text, _, had_errors) = encoding_rs::WINDOWS_1253.decode(bytes);
    if !had_errors {
        return text.into_owned();
    }
    String::from_utf8_lossy(bytes).into_owned()
}

fn contains_algorithm_keyword(text: &str) -> bool {
    let canonical = eapc_util::canonicalize(text);
    canonical.contains("ALGORITHM") || canonical.contains(&eapc_util::canonicalize("ΑΛΓΟΡΙΘΜΟΣ"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_valid_utf8_with_algorithm_keyword() {
        let source = "ΑΛΓΟΡΙΘΜΟΣ Hi ΑΡΧΗ ΤΕΛΟΣ";
        assert_eq!(decode_source(source.as_bytes()), source);
    }

    #[test]
    fn falls_back_to_windows_1253_on_invalid_utf8() {
        let (encoded, _, _) = encoding_rs::WINDOWS_1253.encode("ΑΛΓΟΡΙΘΜΟΣ Hi ΑΡΧΗ ΤΕΛΟΣ");
        let decoded = decode_source(&encoded);
        assert!(decoded.contains("ΑΛΓΟΡΙΘΜΟΣ"));
    }
}
