//! End-to-end properties of a lex pass.
//!
//! Every test runs the full pipeline through [`MboxLexer`] and checks the
//! pass with [`invariants::check`] before looking at specific lines.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::{
    lexer::{LexPass, MboxLexer},
    snapshot::invariants,
    style::{LineCategory, Style},
};

const FROM: &str = "From alice@example.com Mon Jan 01 12:00:00 2024\n";
const DATE: &str = "Date: 01/01/24 12:00 pm\n";
const SUBJECT: &str = "Subject: hello\n";

fn lex(doc: &str) -> LexPass {
    let rope = Rope::from(doc);
    let pass = MboxLexer::new().lex_all(&rope);
    invariants::check(&rope, &pass);
    pass
}

fn resolved(pass: &LexPass) -> Vec<LineCategory> {
    pass.resolved.iter().map(|(_, c)| c).collect()
}

#[rstest]
#[case::empty("")]
#[case::single_newline("\n")]
#[case::no_terminator("just text")]
#[case::header_block("From a Mon Jan 01 00:00:00 2000\nDate: 01/01/00 00:00 am\nSubject: x\n")]
#[case::crlf_only("\r\n\r\n")]
#[case::binary_noise("\u{0}\u{7f}From \u{1}\n\u{ff}Date:\n")]
fn every_byte_gets_one_style(#[case] doc: &str) {
    let pass = lex(doc);
    assert_eq!(pass.styles.len(), doc.len());
    assert_eq!(pass.range, 0..doc.len());
}

#[test]
fn happy_path_block_is_highlighted() {
    let doc = format!("{FROM}{DATE}{SUBJECT}\nbody\n");
    let pass = lex(&doc);

    assert_eq!(
        resolved(&pass),
        vec![
            LineCategory::From,
            LineCategory::Date,
            LineCategory::Subject,
            LineCategory::Default,
            LineCategory::Default,
        ]
    );

    let date = FROM.len();
    let subject = date + DATE.len();
    assert_eq!(pass.styles.style_at(3), Some(Style::From));
    assert_eq!(pass.styles.style_at(4), Some(Style::FromValue));
    assert_eq!(pass.styles.style_at(date + 4), Some(Style::Date));
    assert_eq!(pass.styles.style_at(date + 5), Some(Style::DateValue));
    assert_eq!(pass.styles.style_at(subject + 7), Some(Style::Subject));
    assert_eq!(pass.styles.style_at(subject + 8), Some(Style::SubjectValue));
    assert_eq!(pass.styles.style_at(doc.len() - 1), Some(Style::Default));
}

#[test]
fn broken_date_demotes_the_whole_block() {
    let doc = format!("{FROM}Date: yesterday\n{SUBJECT}");
    let pass = lex(&doc);

    assert_eq!(pass.raw.get(0), Some(LineCategory::From));
    assert_eq!(pass.raw.get(2), Some(LineCategory::Subject));
    assert_eq!(resolved(&pass), vec![LineCategory::Default; 3]);
    assert!(pass.styles.styles.iter().all(|&s| s == Style::Default));
}

#[test]
fn lone_from_line_is_body_text() {
    let doc = format!("text\n{FROM}more\n");
    let pass = lex(&doc);

    assert_eq!(pass.raw.get(1), Some(LineCategory::From));
    assert_eq!(pass.resolved.get(1), Some(LineCategory::Default));
}

#[test]
fn stray_subject_in_body_is_demoted() {
    let doc = format!("{FROM}{DATE}{SUBJECT}\n{SUBJECT}");
    let pass = lex(&doc);

    assert_eq!(pass.raw.get(4), Some(LineCategory::Subject));
    assert_eq!(pass.resolved.get(4), Some(LineCategory::Default));
    assert_eq!(pass.resolved.get(2), Some(LineCategory::Subject));
}

#[test]
fn independent_blocks_resolve_on_their_own() {
    let doc = format!("{FROM}{DATE}{SUBJECT}\n{FROM}{SUBJECT}\n{FROM}{DATE}{SUBJECT}");
    let pass = lex(&doc);

    assert_eq!(
        resolved(&pass),
        vec![
            LineCategory::From,
            LineCategory::Date,
            LineCategory::Subject,
            LineCategory::Default,
            LineCategory::Default,
            LineCategory::Default,
            LineCategory::Default,
            LineCategory::From,
            LineCategory::Date,
            LineCategory::Subject,
        ]
    );
}

#[test]
fn lexing_is_idempotent() {
    let doc = format!("{SUBJECT}{FROM}{DATE}{SUBJECT}\nbody\n{FROM}");
    let first = lex(&doc);
    let second = lex(&doc);

    assert_eq!(first.raw, second.raw);
    assert_eq!(first.resolved, second.resolved);
    assert_eq!(first.styles, second.styles);
}

/// Lexing any byte range yields the same styles the full pass gives those
/// bytes.
#[rstest]
#[case::valid_blocks(format!("intro\n{FROM}{DATE}{SUBJECT}\nbody\n{FROM}{DATE}{SUBJECT}tail"))]
#[case::opens_with_invalid_run(format!("{SUBJECT}{FROM}{DATE}\nbody\n{FROM}{DATE}{SUBJECT}x"))]
#[case::crlf(format!("{FROM}{DATE}{SUBJECT}\r\n{DATE}{SUBJECT}\r\nend\r\n"))]
fn ranged_passes_agree_with_full_pass(#[case] doc: String) {
    let rope = Rope::from(doc.as_str());
    let lexer = MboxLexer::new();
    let full = lexer.lex_all(&rope);

    for start in 0..=doc.len() {
        for length in [0, 1, 3, 17, 1000] {
            let pass = lexer.lex(&rope, start, length, Style::Default);
            invariants::check(&rope, &pass);
            for pos in pass.range.clone() {
                assert_eq!(
                    pass.styles.style_at(pos),
                    full.styles.style_at(pos),
                    "position {pos} in pass {start}+{length}"
                );
            }
        }
    }
}

#[test]
fn unterminated_final_block_is_highlighted() {
    let doc = format!("{FROM}{DATE}Subject: last");
    let pass = lex(&doc);

    assert_eq!(pass.resolved.get(2), Some(LineCategory::Subject));
    assert_eq!(
        pass.styles.style_at(doc.len() - 1),
        Some(Style::SubjectValue)
    );
}
