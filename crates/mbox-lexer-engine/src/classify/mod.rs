//! # Line Classification
//!
//! Phase 1 of a lex pass: every line is matched on its own, without looking
//! at its neighbours, against the fixed header grammars in [`grammar`].
//! Lines matching nothing are [`LineCategory::Default`]; classification
//! never fails.

pub mod cursor;
pub mod grammar;

use log::trace;

use crate::{source::CharSource, style::LineCategory, table::LineTable};

/// Classifies individual mbox lines.
pub struct MboxLineClassifier;

impl MboxLineClassifier {
    /// Classifies one line, terminator included.
    ///
    /// Rules are tried in order: `From`, `Date`, `Subject`. A cheap prefix
    /// check guards each full grammar match.
    pub fn classify(&self, line: &[u8]) -> LineCategory {
        if line.starts_with(grammar::FROM_PREFIX) && grammar::is_from_line(line) {
            LineCategory::From
        } else if line.starts_with(grammar::DATE_PREFIX) && grammar::is_date_line(line) {
            LineCategory::Date
        } else if line.starts_with(grammar::SUBJECT_PREFIX) && grammar::is_subject_line(line) {
            LineCategory::Subject
        } else {
            LineCategory::Default
        }
    }
}

/// Classifies every line from `start_line` to the end of `source`.
///
/// Bytes accumulate in a line buffer until a `\n` closes the line. A final
/// line without a terminator is classified as well, so every line holding
/// at least one byte gets exactly one entry.
pub fn classify_lines<S: CharSource + ?Sized>(source: &S, start_line: usize) -> LineTable {
    let classifier = MboxLineClassifier;
    let mut table = LineTable::new();
    let mut buf = Vec::new();
    let mut line = start_line;

    for b in source.bytes_from(source.offset_of_line(start_line)) {
        buf.push(b);
        if b == b'\n' {
            table.insert(line, classifier.classify(&buf));
            buf.clear();
            line += 1;
        }
    }
    if !buf.is_empty() {
        table.insert(line, classifier.classify(&buf));
    }

    trace!(
        "classified lines {start_line}..{} ({} entries)",
        start_line + table.len(),
        table.len()
    );
    table
}
