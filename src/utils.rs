//! Path helpers.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

const INPUT_EXTENSION: &str = ".txt";
const OUTPUT_SUFFIX: &str = "_converted.txt";

/// Derives the output path for `input`.
///
/// A trailing `.txt` is removed (case-sensitive) and `_converted.txt` is
/// appended. The rest of the path, directories included, is kept as given.
///
/// # Example
/// `converted_output_path("notes.txt")` returns `notes_converted.txt`,
/// `converted_output_path("data")` returns `data_converted.txt`.
pub fn converted_output_path(input: impl AsRef<Path>) -> PathBuf {
    let raw = input.as_ref().as_os_str();
    let mut output = match raw.to_str() {
        Some(s) => OsString::from(s.strip_suffix(INPUT_EXTENSION).unwrap_or(s)),
        // Non-UTF-8 names are kept whole.
        None => raw.to_os_string(),
    };
    output.push(OUTPUT_SUFFIX);
    PathBuf::from(output)
}
