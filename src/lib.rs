//! # labelgen
//!
//! Generates the display-label table consumed by the mushroom classifier
//! app. The input is a newline-delimited list of identifier-style tokens
//! (`almond_mushroom`); the output is a TypeScript constant holding the
//! same entries as human-readable labels (`'Almond Mushroom'`). The app
//! looks labels up by classifier output index, so entry order must match
//! input line order exactly.
//!
//! The pipeline is three small pieces: [`format`] turns one raw token into
//! one label, [`document::LabelDocument`] collects the ordered label list
//! and renders the output text, and [`generator::generate`] wraps the file
//! I/O around both.

pub mod document;
pub mod format;
pub mod generator;

pub use document::LabelDocument;
pub use format::format_label;
pub use generator::{generate, GenerateError};
