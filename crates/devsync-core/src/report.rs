//! Classification and rendering of transfer tool output
//!
//! Each stdout line of the transfer tool falls into exactly one
//! [`LineCategory`]. Classification is a pure function; presentation is a
//! separate step so tests can check either one on its own.

use colored::Colorize;

const DELETION_MARKER: &str = "deleting ";

/// Transfer phase, summary and file-list lines
const META_PREFIXES: &[&str] = &[
    "sending ",
    "receiving ",
    "sent ",
    "total ",
    "building file list",
];

/// What a single line of transfer output says about the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCategory {
    /// A file removed from the destination
    Deleted,
    /// Progress, summary and blank lines
    MetaInfo,
    /// A directory entry
    Directory,
    /// A file created or updated at the destination
    AddedOrChanged,
}

/// Categorize one output line. Checks run in priority order.
pub fn classify(line: &str) -> LineCategory {
    if line.starts_with(DELETION_MARKER) {
        LineCategory::Deleted
    } else if line.is_empty() || META_PREFIXES.iter().any(|p| line.starts_with(p)) {
        LineCategory::MetaInfo
    } else if line.ends_with('/') {
        LineCategory::Directory
    } else {
        LineCategory::AddedOrChanged
    }
}

/// An output line together with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub raw_text: String,
    pub category: LineCategory,
}

impl ClassifiedLine {
    pub fn new(line: &str) -> Self {
        Self {
            raw_text: line.to_string(),
            category: classify(line),
        }
    }

    /// Presentation form: `-` for deletions, `+` for additions, dimmed noise.
    pub fn render(&self) -> String {
        let line = &self.raw_text;
        match self.category {
            LineCategory::Deleted => format!("- {line}").red().to_string(),
            LineCategory::MetaInfo => line.dimmed().to_string(),
            LineCategory::Directory => format!("  {line}").dimmed().to_string(),
            LineCategory::AddedOrChanged => format!("+ {line}").green().to_string(),
        }
    }
}

/// Classify every line of captured stdout.
pub fn classify_output(stdout: &str) -> Vec<ClassifiedLine> {
    stdout.lines().map(ClassifiedLine::new).collect()
}

/// Standard error lines are shown as errors whatever they contain.
pub fn render_error_line(line: &str) -> String {
    line.red().to_string()
}
