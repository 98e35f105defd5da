//! Main library for the punctconv project.
//!
//! Converts full-width (CJK) punctuation to the matching ASCII marks. The
//! conversion is a fixed, per-character table lookup: every other character,
//! line order and line count are preserved.
//!
//! [`convert`] works on a single line, [`convert_lines`] on any reader/writer
//! pair, and [`run`] on a file, writing `<name>_converted.txt` next to it.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub use crate::table::{is_fullwidth_punctuation, substitute, substitutions};
pub use crate::utils::converted_output_path;

mod table;
mod utils;

const MAX_ENCODING_WARNINGS: usize = 10;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Error opening file '{path}': {source}")]
    InputFileOpen { path: PathBuf, source: io::Error },

    #[error("Error creating output file '{path}': {source}")]
    OutputFileCreate { path: PathBuf, source: io::Error },

    #[error("Error reading from input file at line {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("Error writing to output file at line {line}: {source}")]
    Write { line: usize, source: io::Error },

    #[error("Error flushing output buffer to '{path}': {source}")]
    Flush { path: PathBuf, source: io::Error },
}

/// Counters gathered while converting a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    /// Number of lines read, and written.
    pub lines: usize,
    /// Number of characters that were replaced.
    pub substitutions: usize,
}

/// The outcome of a successful [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub stats: LineStats,
}

/// Replaces every full-width punctuation mark in `line` with its ASCII form.
///
/// The result has exactly as many characters as the input.
pub fn convert(line: &str) -> String {
    line.chars().map(substitute).collect()
}

fn convert_counting(line: &str, out: &mut String) -> usize {
    let mut replaced = 0;
    for c in line.chars() {
        let r = substitute(c);
        if r != c {
            replaced += 1;
        }
        out.push(r);
    }
    replaced
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Decodes `bytes` as UTF-8, writing one U+FFFD for every byte that is not
/// part of a valid sequence.
fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(s);
    }
    let mut decoded = String::with_capacity(bytes.len() + 8);
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
        for _ in chunk.invalid() {
            decoded.push(char::REPLACEMENT_CHARACTER);
        }
    }
    Cow::Owned(decoded)
}

/// Converts a stream line by line and writes every line back with a `\n`.
///
/// Lines end at `\n`; a `\r` right before it is dropped, and a last line
/// without a terminator still counts. Each byte of invalid UTF-8 becomes one
/// U+FFFD and is reported through a warning.
///
/// The writer is not flushed, that is left to the caller.
pub fn convert_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<LineStats, ConversionError> {
    let mut stats = LineStats::default();
    let mut n_encoding_warnings = 0;
    let mut buffer = vec![];
    let mut converted = String::new();

    loop {
        buffer.clear();
        let n_read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|source| ConversionError::Read {
                line: stats.lines + 1,
                source,
            })?;
        if n_read == 0 {
            break;
        }
        stats.lines += 1;

        let decoded = decode_lossy(&buffer);
        if matches!(decoded, Cow::Owned(_)) {
            if n_encoding_warnings < MAX_ENCODING_WARNINGS {
                warn!(line = stats.lines, "non-UTF-8 bytes were replaced");
            } else if n_encoding_warnings == MAX_ENCODING_WARNINGS {
                warn!("too many encoding errors, no further ones reported");
            }
            n_encoding_warnings += 1;
        }

        converted.clear();
        stats.substitutions += convert_counting(strip_line_terminator(&decoded), &mut converted);
        converted.push('\n');

        writer
            .write_all(converted.as_bytes())
            .map_err(|source| ConversionError::Write {
                line: stats.lines,
                source,
            })?;
    }

    if n_encoding_warnings > 0 {
        warn!(lines = n_encoding_warnings, "input contained non-UTF-8 lines");
    }

    Ok(stats)
}

/// Runs [`convert_lines`] and flushes `writer`, reporting a failed flush
/// against `output_path`.
fn convert_and_flush<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    output_path: &Path,
) -> Result<LineStats, ConversionError> {
    let stats = convert_lines(reader, &mut writer)?;
    writer.flush().map_err(|source| ConversionError::Flush {
        path: output_path.to_path_buf(),
        source,
    })?;
    Ok(stats)
}

/// Converts the file at `input_path` into [`converted_output_path`]`(input_path)`.
///
/// The output file is only created once the input has been opened. On a
/// read or write error the lines already written stay in the output file.
pub fn run(input_path: impl AsRef<Path>) -> Result<ConversionSummary, ConversionError> {
    let input_path = input_path.as_ref();
    let output_path = converted_output_path(input_path);
    debug!(
        input = %input_path.display(),
        output = %output_path.display(),
        "starting conversion"
    );

    let input = File::open(input_path).map_err(|source| ConversionError::InputFileOpen {
        path: input_path.to_path_buf(),
        source,
    })?;
    let output = File::create(&output_path).map_err(|source| ConversionError::OutputFileCreate {
        path: output_path.clone(),
        source,
    })?;

    let stats = convert_and_flush(
        BufReader::new(input),
        BufWriter::new(output),
        &output_path,
    )?;

    debug!(
        lines = stats.lines,
        substitutions = stats.substitutions,
        "conversion finished"
    );

    Ok(ConversionSummary {
        input_path: input_path.to_path_buf(),
        output_path,
        stats,
    })
}
