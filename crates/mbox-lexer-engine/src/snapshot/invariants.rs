use crate::{lexer::LexPass, resolve::validate_run, source::CharSource};

/// Validates lex pass invariants.
///
/// Asserts that:
/// - Every line from the first classified line to the last line holding a
///   byte has exactly one raw and one resolved entry
/// - Default lines resolve to themselves
/// - Every maximal run of non-default raw lines is either kept verbatim
///   (only when it opens with `From`, `Date`, `Subject`) or entirely demoted
/// - Exactly one style is recorded per byte of the requested range
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check<S: CharSource + ?Sized>(source: &S, pass: &LexPass) {
    let start = source.offset_of_line(pass.first_line);
    if start < source.len() {
        let last = source.line_of_offset(source.len() - 1);
        for line in pass.first_line..=last {
            assert!(
                pass.raw.get(line).is_some(),
                "line {line} has no raw category"
            );
            assert!(
                pass.resolved.get(line).is_some(),
                "line {line} has no resolved category"
            );
        }
    }
    assert_eq!(
        pass.raw.len(),
        pass.resolved.len(),
        "raw and resolved tables differ in size"
    );

    for (line, raw) in pass.raw.iter() {
        if raw.is_default() {
            assert_eq!(
                pass.resolved.get(line),
                Some(raw),
                "default line {line} changed during resolution"
            );
        }
    }

    for run in pass.raw.runs() {
        let kept = run
            .lines()
            .all(|line| pass.resolved.get(line) == pass.raw.get(line));
        let demoted = run
            .lines()
            .all(|line| pass.resolved.get(line).is_some_and(|c| c.is_default()));
        match validate_run(&pass.raw, run) {
            Ok(()) => assert!(kept, "valid run {run:?} was not kept verbatim"),
            Err(reason) => assert!(
                demoted,
                "invalid run {run:?} ({reason:?}) was not entirely demoted"
            ),
        }
    }

    assert_eq!(
        pass.styles.range(),
        pass.range,
        "styled range does not match the requested range"
    );
}
