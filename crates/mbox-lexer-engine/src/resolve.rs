//! # Block Resolution
//!
//! Phase 2 of a lex pass. Header lines only count as headers when they
//! open a message: every maximal run of non-default lines must begin with
//! `From`, `Date`, `Subject` on its first three lines. A run that does not
//! is demoted to [`LineCategory::Default`] as a whole; a run that does
//! keeps its raw categories unchanged, including any lines after the third.

use log::trace;

use crate::{
    style::LineCategory,
    table::{LineTable, Run},
};

/// Why a run was demoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demotion {
    /// The first line is not a `From` line.
    NotFrom,
    /// The second line is missing or not a `Date` line.
    MissingDate,
    /// The third line is missing or not a `Subject` line.
    MissingSubject,
}

/// The categories a valid run must open with, in order.
const HEADER_SEQUENCE: [(LineCategory, Demotion); 3] = [
    (LineCategory::From, Demotion::NotFrom),
    (LineCategory::Date, Demotion::MissingDate),
    (LineCategory::Subject, Demotion::MissingSubject),
];

/// Checks the first three lines of `run` against the header sequence.
///
/// Positions past the end of the run never match, so runs shorter than
/// three lines always fail.
pub fn validate_run(raw: &LineTable, run: Run) -> Result<(), Demotion> {
    for (offset, (expected, reason)) in HEADER_SEQUENCE.into_iter().enumerate() {
        let line = run.begin + offset;
        if !run.contains(line) || raw.get(line) != Some(expected) {
            return Err(reason);
        }
    }
    Ok(())
}

/// Builds the resolved table from the raw classification.
///
/// Default lines are copied as-is. Each run is copied verbatim when it
/// validates and demoted in its entirety when it does not.
pub fn resolve(raw: &LineTable) -> LineTable {
    let mut resolved = raw.clone();

    for run in raw.runs() {
        if let Err(reason) = validate_run(raw, run) {
            trace!("demoting lines {}..={} ({reason:?})", run.begin, run.end);
            for line in run.lines() {
                resolved.insert(line, LineCategory::Default);
            }
        }
    }

    resolved
}
