use std::{ops::Range, str::FromStr};

use log::warn;
use mbox_lexer_config::Theme;
use mbox_lexer_engine::{CharSource, LexPass, Style};
use ratatui::{
    style::Color,
    text::{Line, Span},
};
use xi_rope::Rope;

/// Foreground color per style id.
pub type Palette = [Color; 7];

/// Resolves the theme's color names. Names the terminal cannot show fall
/// back to the terminal's default color.
pub fn palette(theme: &Theme) -> Palette {
    Style::ALL.map(|style| {
        let name = theme.color_name(style);
        Color::from_str(name).unwrap_or_else(|_| {
            warn!(
                "unknown color `{name}` for style `{}`, using the terminal default",
                style.name()
            );
            Color::Reset
        })
    })
}

/// Builds display lines for `lines` from a pass covering at least their
/// bytes. Line terminators are dropped; bytes the pass did not style are
/// shown uncolored.
pub fn styled_lines(
    source: &Rope,
    pass: &LexPass,
    lines: Range<usize>,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let segments = pass.styles.segments();

    lines
        .map(|line| {
            let start = CharSource::offset_of_line(source, line);
            let next = CharSource::offset_of_line(source, line + 1);
            let raw = source.slice_to_cow(start..next);
            let text = raw.trim_end_matches(['\r', '\n']);
            let end = start + text.len();

            let mut spans = Vec::new();
            let mut cursor = start;
            for (range, style) in &segments {
                let from = range.start.max(cursor);
                let to = range.end.min(end);
                if from >= to {
                    continue;
                }
                if from > cursor {
                    spans.push(Span::raw(text[cursor - start..from - start].to_string()));
                }
                spans.push(Span::styled(
                    text[from - start..to - start].to_string(),
                    palette[usize::from(style.id())],
                ));
                cursor = to;
            }
            if cursor < end {
                spans.push(Span::raw(text[cursor - start..].to_string()));
            }
            Line::from(spans)
        })
        .collect()
}
