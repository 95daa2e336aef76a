//! # Style Emission
//!
//! Phase 3 of a lex pass: walk the bytes again and assign each position a
//! [`Style`]. Every line starts in the style of its resolved category. On a
//! header line, the keyword keeps the keyword style and everything from the
//! space that ends the keyword onwards takes the matching value style.

use std::ops::Range;

use crate::{
    source::CharSource,
    style::{LineCategory, Style},
    table::LineTable,
};

/// Receives the style of each position as the tokenizer walks the text.
pub trait StyleSink {
    fn set_style(&mut self, pos: usize, style: Style);
}

/// Styles for a contiguous byte range of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRange {
    /// Offset of the first styled byte.
    pub start: usize,
    /// One style per byte, starting at `start`.
    pub styles: Vec<Style>,
}

impl StyledRange {
    /// A range of `len` positions, all initially `fill`.
    pub fn new(start: usize, len: usize, fill: Style) -> Self {
        Self {
            start,
            styles: vec![fill; len],
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.styles.len()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Style at absolute position `pos`, if it lies in this range.
    pub fn style_at(&self, pos: usize) -> Option<Style> {
        pos.checked_sub(self.start)
            .and_then(|i| self.styles.get(i))
            .copied()
    }

    /// Consecutive positions sharing a style, as `(range, style)` pairs.
    pub fn segments(&self) -> Vec<(Range<usize>, Style)> {
        let mut out: Vec<(Range<usize>, Style)> = Vec::new();
        for (i, &style) in self.styles.iter().enumerate() {
            let pos = self.start + i;
            if let Some((range, current)) = out.last_mut()
                && *current == style
            {
                range.end = pos + 1;
                continue;
            }
            out.push((pos..pos + 1, style));
        }
        out
    }
}

impl StyleSink for StyledRange {
    /// Positions outside the range are ignored.
    fn set_style(&mut self, pos: usize, style: Style) {
        if let Some(slot) = pos
            .checked_sub(self.start)
            .and_then(|i| self.styles.get_mut(i))
        {
            *slot = style;
        }
    }
}

/// The byte pair that ends a header keyword for lines in `style`.
fn keyword_end(style: Style) -> Option<[u8; 2]> {
    match style {
        Style::From => Some(*b"m "),
        Style::Date | Style::Subject => Some(*b": "),
        _ => None,
    }
}

/// Walks `source` from the start of `first_line` up to `end` and reports
/// the style of every position to `sink`.
///
/// Line numbering starts at `first_line`; `resolved` must cover the lines
/// walked. A line missing from `resolved` starts in `init_style`.
pub fn tokenize<S, K>(
    source: &S,
    resolved: &LineTable,
    first_line: usize,
    end: usize,
    init_style: Style,
    sink: &mut K,
) where
    S: CharSource + ?Sized,
    K: StyleSink + ?Sized,
{
    let mut pos = source.offset_of_line(first_line);
    let mut line = first_line;
    let mut state = init_style;
    let mut at_line_start = true;
    let mut bytes = source.bytes_from(pos).peekable();

    while pos < end {
        let Some(ch) = bytes.next() else {
            break;
        };
        if at_line_start {
            state = resolved.get(line).map_or(init_style, LineCategory::style);
            at_line_start = false;
        }
        if ch == b'\n' {
            sink.set_style(pos, state);
            line += 1;
            at_line_start = true;
            pos += 1;
            continue;
        }

        let next = bytes.peek().copied().unwrap_or(0);
        if keyword_end(state) == Some([ch, next]) {
            // The closing keyword byte keeps the keyword style; the space
            // after it already belongs to the value.
            sink.set_style(pos, state);
            state = state.value_style();
            sink.set_style(pos + 1, state);
            bytes.next();
            pos += 2;
            continue;
        }

        sink.set_style(pos, state);
        pos += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::classify_lines, resolve::resolve};
    use pretty_assertions::assert_eq;

    fn styles_of(doc: &str) -> Vec<Style> {
        let resolved = resolve(&classify_lines(doc, 0));
        let mut out = StyledRange::new(0, doc.len(), Style::Default);
        tokenize(doc, &resolved, 0, doc.len(), Style::Default, &mut out);
        out.styles
    }

    fn expect(parts: &[(Style, usize)]) -> Vec<Style> {
        parts
            .iter()
            .flat_map(|&(style, n)| std::iter::repeat_n(style, n))
            .collect()
    }

    const FROM: &str = "From bob Mon Jan 01 12:00:00 2024\n";
    const DATE: &str = "Date: 01/02/03 10:00 am\n";
    const SUBJECT: &str = "Subject: Re: hi\n";

    #[test]
    fn header_block_splits_keyword_and_value() {
        let doc = format!("{FROM}{DATE}{SUBJECT}body\n");
        assert_eq!(
            styles_of(&doc),
            expect(&[
                (Style::From, 4),
                (Style::FromValue, FROM.len() - 4),
                (Style::Date, 5),
                (Style::DateValue, DATE.len() - 5),
                (Style::Subject, 8),
                (Style::SubjectValue, SUBJECT.len() - 8),
                (Style::Default, 5),
            ])
        );
    }

    #[test]
    fn demoted_lines_stay_default() {
        let doc = format!("{SUBJECT}x\n");
        assert_eq!(styles_of(&doc), vec![Style::Default; doc.len()]);
    }

    #[test]
    fn keyword_without_trailing_space_keeps_keyword_style() {
        // "Subject:\n" is a subject line, but there is no ": " to end the
        // keyword, so the whole line keeps the keyword style.
        let doc = format!("{FROM}{DATE}Subject:\n");
        let styles = styles_of(&doc);
        let subject_start = FROM.len() + DATE.len();
        assert_eq!(styles[subject_start..].to_vec(), vec![Style::Subject; 9]);
    }

    #[test]
    fn walk_stops_at_end() {
        let doc = format!("{FROM}{DATE}{SUBJECT}");
        let resolved = resolve(&classify_lines(doc.as_str(), 0));
        let mut out = StyledRange::new(0, 6, Style::Default);
        tokenize(doc.as_str(), &resolved, 0, 6, Style::Default, &mut out);
        assert_eq!(
            out.styles,
            expect(&[(Style::From, 4), (Style::FromValue, 2)])
        );
    }

    #[test]
    fn positions_outside_the_range_are_ignored() {
        let mut out = StyledRange::new(10, 2, Style::Default);
        out.set_style(9, Style::From);
        out.set_style(12, Style::From);
        out.set_style(11, Style::Date);
        assert_eq!(out.styles, vec![Style::Default, Style::Date]);
    }

    #[test]
    fn segments_group_equal_styles() {
        let out = StyledRange {
            start: 4,
            styles: expect(&[(Style::Date, 2), (Style::DateValue, 3)]),
        };
        assert_eq!(
            out.segments(),
            vec![(4..6, Style::Date), (6..9, Style::DateValue)]
        );
        assert_eq!(out.style_at(3), None);
        assert_eq!(out.style_at(6), Some(Style::DateValue));
        assert_eq!(out.range(), 4..9);
    }
}
