use std::ops::Range;

use log::debug;
use thiserror::Error;

use crate::{
    classify::{MboxLineClassifier, classify_lines},
    resolve::resolve,
    source::CharSource,
    style::Style,
    table::LineTable,
    tokenize::{StyledRange, tokenize},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexerError {
    #[error("the mbox lexer does not support {what}")]
    Unsupported { what: String },
}

/// Everything one lex pass produced.
///
/// Owned by the caller; nothing is retained between passes.
#[derive(Debug, Clone)]
pub struct LexPass {
    /// Line the pass started classifying from.
    pub first_line: usize,
    /// Byte range that was styled, after clamping to the document.
    pub range: Range<usize>,
    /// Per-line categories straight from the classifier.
    pub raw: LineTable,
    /// Per-line categories after run validation.
    pub resolved: LineTable,
    /// One style per byte of `range`.
    pub styles: StyledRange,
}

/// Lexer for mbox archives.
///
/// Highlights the `From`, `Date:` and `Subject:` header lines that open each
/// message. Has no properties, word lists or folding.
#[derive(Debug, Clone, Copy, Default)]
pub struct MboxLexer;

impl MboxLexer {
    pub const NAME: &'static str = "mbox";

    pub fn new() -> Self {
        Self
    }

    /// Styles `length` bytes starting at `start`.
    ///
    /// Classification restarts at the first line of the header run that
    /// contains `start` (or at `start`'s own line when it is not part of
    /// one), so the result for a range never depends on what an earlier
    /// call saw. `init_style` is used only for lines the pass has no
    /// category for, which cannot happen for a non-empty range.
    pub fn lex<S: CharSource + ?Sized>(
        &self,
        source: &S,
        start: usize,
        length: usize,
        init_style: Style,
    ) -> LexPass {
        let doc_len = source.len();
        let start = start.min(doc_len);
        let end = start.saturating_add(length).min(doc_len);

        let first_line = restart_line(source, source.line_of_offset(start));
        let raw = classify_lines(source, first_line);
        let resolved = resolve(&raw);

        let mut styles = StyledRange::new(start, end - start, init_style);
        tokenize(source, &resolved, first_line, end, init_style, &mut styles);

        debug!(
            "lexed {start}..{end} from line {first_line}: {} lines, {} runs",
            raw.len(),
            raw.runs().len()
        );

        LexPass {
            first_line,
            range: start..end,
            raw,
            resolved,
            styles,
        }
    }

    /// Styles the whole document.
    pub fn lex_all<S: CharSource + ?Sized>(&self, source: &S) -> LexPass {
        self.lex(source, 0, source.len(), Style::Default)
    }

    /// Folding is not computed for mbox archives.
    pub fn fold<S: CharSource + ?Sized>(&self, _source: &S, _start: usize, _length: usize) {}

    pub fn property_names(&self) -> &'static [&'static str] {
        &[]
    }

    pub fn describe_property(&self, _name: &str) -> Option<&'static str> {
        None
    }

    pub fn property_set(&self, key: &str, _value: &str) -> Result<(), LexerError> {
        Err(LexerError::Unsupported {
            what: format!("property `{key}`"),
        })
    }

    pub fn describe_word_list_sets(&self) -> &'static [&'static str] {
        &[]
    }

    pub fn word_list_set(&self, index: usize, _words: &str) -> Result<(), LexerError> {
        Err(LexerError::Unsupported {
            what: format!("word list {index}"),
        })
    }

    /// Style names in id order.
    pub fn style_names(&self) -> [&'static str; 7] {
        Style::ALL.map(Style::name)
    }
}

/// Walks back from `line` to the first line of the header run it sits in.
///
/// Previous lines are found by scanning back for `\n` from the current line
/// start, so the walk costs the bytes of the run and never re-resolves a
/// line number through the source.
fn restart_line<S: CharSource + ?Sized>(source: &S, line: usize) -> usize {
    let classifier = MboxLineClassifier;
    if classifier.classify(&source.line_bytes(line)).is_default() {
        return line;
    }

    let mut line = line;
    let mut start = source.offset_of_line(line);
    while start > 0 {
        // `start - 1` is the previous line's terminator.
        let mut prev = start - 1;
        while prev > 0 && source.byte_at(prev - 1) != b'\n' {
            prev -= 1;
        }
        let bytes: Vec<u8> = (prev..start).map(|i| source.byte_at(i)).collect();
        if classifier.classify(&bytes).is_default() {
            break;
        }
        start = prev;
        line -= 1;
    }
    line
}
