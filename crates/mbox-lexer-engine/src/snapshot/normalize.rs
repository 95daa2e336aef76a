use std::fmt;

use crate::{lexer::LexPass, source::CharSource, style::LineCategory};

/// Snapshot of a lex pass, one row per classified line.
#[derive(Debug)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
}

/// Snapshot of a single line.
#[derive(Debug)]
pub struct LineSnap {
    pub line: usize,
    pub raw: LineCategory,
    pub resolved: LineCategory,
    /// Run-length encoded styles of the line's bytes that fell inside the
    /// styled range, e.g. `from*4 from_value*30`.
    pub styles: String,
    /// Line text without its terminator, truncated for readability.
    pub text: String,
}

const PREVIEW_MAX: usize = 60;

/// Converts a lex pass into a [`Snap`].
pub fn normalize<S: CharSource + ?Sized>(source: &S, pass: &LexPass) -> Snap {
    let lines = pass
        .raw
        .iter()
        .map(|(line, raw)| {
            let start = source.offset_of_line(line);
            let end = source.offset_of_line(line + 1);
            LineSnap {
                line,
                raw,
                resolved: pass.resolved.get(line).unwrap_or(LineCategory::Default),
                styles: encode_styles(pass, start..end),
                text: preview(&source.line_bytes(line), PREVIEW_MAX),
            }
        })
        .collect();

    Snap { lines }
}

fn encode_styles(pass: &LexPass, line: std::ops::Range<usize>) -> String {
    let mut parts = Vec::new();
    for (range, style) in pass.styles.segments() {
        let from = range.start.max(line.start);
        let to = range.end.min(line.end);
        if from < to {
            parts.push(format!("{}*{}", style.name(), to - from));
        }
    }
    parts.join(" ")
}

/// Line text for display: terminator stripped, at most `max` bytes kept
/// with a `...` suffix when truncated.
fn preview(bytes: &[u8], max: usize) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut s = text.trim_end_matches(['\r', '\n']).to_string();
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}

impl fmt::Display for LineSnap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} [{}] {:?}",
            self.line,
            self.raw.name(),
            self.resolved.name(),
            self.styles,
            self.text
        )
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
