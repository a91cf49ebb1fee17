//! File-to-file label generation.
//!
//! This is the single operation boundary of the tool: read the token list,
//! build the label document, write the generated source file. All I/O
//! failures surface as [`GenerateError`]; nothing is retried or recovered
//! internally.

use crate::document::LabelDocument;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default location of the token list, relative to the app root.
pub const DEFAULT_INPUT_PATH: &str = "src/utils/mushrooms.txt";

/// Default location of the generated label table.
pub const DEFAULT_OUTPUT_PATH: &str = "src/utils/labels.ts";

/// Errors that can occur while generating the label table.
#[derive(Debug)]
pub enum GenerateError {
    /// The input file is missing or could not be read.
    ReadInput { path: PathBuf, source: io::Error },
    /// The input file exists but is not valid UTF-8 text.
    DecodeInput { path: PathBuf, source: io::Error },
    /// The output file could not be created or written.
    WriteOutput { path: PathBuf, source: io::Error },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::ReadInput { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            GenerateError::DecodeInput { path, .. } => {
                write!(f, "{} is not valid UTF-8 text", path.display())
            }
            GenerateError::WriteOutput { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::ReadInput { source, .. }
            | GenerateError::DecodeInput { source, .. }
            | GenerateError::WriteOutput { source, .. } => Some(source),
        }
    }
}

/// Read the token list at `input` and write the generated label table to
/// `output`, returning the number of labels written.
///
/// The input is read in full before the output path is touched, so a
/// missing or unreadable input leaves any existing output file exactly as
/// it was. The output is created or truncated in place; both file handles
/// are scoped and released on every exit path.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<usize, GenerateError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source = fs::read_to_string(input).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => GenerateError::DecodeInput {
            path: input.to_path_buf(),
            source: e,
        },
        _ => GenerateError::ReadInput {
            path: input.to_path_buf(),
            source: e,
        },
    })?;

    let document = LabelDocument::from_source(&source);
    fs::write(output, document.render()).map_err(|e| GenerateError::WriteOutput {
        path: output.to_path_buf(),
        source: e,
    })?;

    Ok(document.len())
}
