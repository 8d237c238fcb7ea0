//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxihuff_core::{CodecReport, OxiHuffError};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Result type shared by all commands.
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Which way data went through the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

/// Whether `path` names stdin or stdout.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Create a progress bar with standard styling.
///
/// Falls back to a spinner when the total size is unknown.
pub fn create_progress_bar(len: Option<u64>, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    match len {
        Some(len) => {
            let pb = ProgressBar::new(len);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            {
                pb.set_style(style.progress_chars("█▓▒░ "));
            }
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) =
                ProgressStyle::default_spinner().template("{spinner} [{elapsed_precise}] {bytes} {msg}")
            {
                pb.set_style(style);
            }
            pb
        }
    }
}

/// Open the input, returning the reader and its size when known.
pub fn open_input(path: &Path) -> Result<(Box<dyn Read>, Option<u64>), OxiHuffError> {
    if is_stdio(path) {
        return Ok((Box::new(io::stdin().lock()), None));
    }

    let file = File::open(path).map_err(OxiHuffError::source_unavailable)?;
    let len = file.metadata().ok().map(|m| m.len());
    Ok((Box::new(BufReader::new(file)), len))
}

/// Refuse to clobber an existing output file unless forced.
pub fn check_output(path: &Path, force: bool) -> CliResult<()> {
    if !is_stdio(path) && path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    Ok(())
}

/// Create the output sink.
pub fn create_output(path: &Path) -> Result<Box<dyn Write>, OxiHuffError> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdout().lock()));
    }

    let file = File::create(path).map_err(OxiHuffError::sink_unavailable)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Format the statistics printed after a compress or decompress run.
pub fn format_report(report: &CodecReport, direction: Direction) -> Vec<String> {
    let (input_label, output_label) = match direction {
        Direction::Compress => ("Input bytes", "Output bytes"),
        Direction::Decompress => ("Compressed bytes", "Restored bytes"),
    };

    let original = match direction {
        Direction::Compress => report.input_len,
        Direction::Decompress => report.output_len,
    };
    let container = report.header_len + report.payload_len;
    let ratio = if original > 0 {
        format!("{:.1}%", container as f64 / original as f64 * 100.0)
    } else {
        "-".to_string()
    };

    vec![
        format!("{:<17} {:>12}", format!("{input_label}:"), report.input_len),
        format!("{:<17} {:>12}", "Payload bytes:", report.payload_len),
        format!("{:<17} {:>12}", "Metadata bytes:", report.header_len),
        format!("{:<17} {:>12}", format!("{output_label}:"), report.output_len),
        format!("{:<17} {:>12}", "Ratio:", ratio),
    ]
}

/// Print run statistics, to stderr when stdout carries the data.
pub fn print_report(report: &CodecReport, direction: Direction, data_on_stdout: bool) {
    for line in format_report(report, direction) {
        if data_on_stdout {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Render a byte for display, quoting printable ASCII.
pub fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("{byte:#04x} '{}'", byte as char)
    } else {
        format!("{byte:#04x}")
    }
}
