//! The generated label document.
//!
//! [`LabelDocument`] holds the ordered label list for one generator run and
//! renders the full text of the output file. Blank input lines are skipped;
//! every other line becomes exactly one entry, in input order.

use crate::format::format_label;

/// Opening line of the generated file.
pub const HEADER: &str = "export const MUSHROOM_LABELS = [";

/// Closing line of the generated file.
pub const FOOTER: &str = "];";

/// Ordered label list plus rendering of the output file text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDocument {
    labels: Vec<String>,
}

impl LabelDocument {
    /// Build the document from the input file's contents.
    ///
    /// Accepts input with or without a trailing newline; the carriage
    /// return of CRLF input is stripped with the rest of the surrounding
    /// whitespace.
    pub fn from_source(source: &str) -> Self {
        let labels = source.lines().filter_map(format_label).collect();
        LabelDocument { labels }
    }

    /// The formatted labels, in input order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels, which equals the number of non-blank input lines.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Render the complete output file text.
    ///
    /// One entry line per label between the fixed header and footer:
    ///
    /// ```text
    /// export const MUSHROOM_LABELS = [
    ///   'Almond Mushroom',
    ///   'Fly Agaric',
    /// ];
    /// ```
    ///
    /// Every entry is two-space indented, single-quoted, and carries a
    /// trailing comma. An empty document puts the footer directly after the
    /// header. The file ends with a single newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');
        for label in &self.labels {
            out.push_str("  '");
            out.push_str(label);
            out.push_str("',\n");
        }
        out.push_str(FOOTER);
        out.push('\n');
        out
    }
}
