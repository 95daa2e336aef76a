//! Fixed header-line grammars.
//!
//! Each matcher receives one line exactly as the classifier buffered it,
//! terminator included, and answers whether the whole line matches.
//! Whitespace inside a line is any run of [`is_ws`] bytes; trailing
//! whitespace (including the terminator) is always allowed.

use super::cursor::{Cursor, is_ws, trim_end_ws};

pub const FROM_PREFIX: &[u8] = b"From ";
pub const DATE_PREFIX: &[u8] = b"Date:";
pub const SUBJECT_PREFIX: &[u8] = b"Subject:";

const WEEKDAYS: [&[u8]; 7] = [b"Mon", b"Tue", b"Wed", b"Thu", b"Fri", b"Sat", b"Sun"];
const MONTHS: [&[u8]; 12] = [
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun", b"Jul", b"Aug", b"Sep", b"Oct", b"Nov",
    b"Dec",
];

/// `From <source> <DOW> <MON> <DD> <HH>:<MM>:<SS> <YYYY>`
///
/// The source is either a bare non-whitespace token or a double-quoted
/// token, which may contain spaces.
pub fn is_from_line(line: &[u8]) -> bool {
    let mut cur = Cursor::new(line);
    if !cur.starts_with(FROM_PREFIX) {
        return false;
    }
    cur.eat(b"From");
    if cur.skip_ws() == 0 {
        return false;
    }

    let Some((head, [dow, mon, day, time, year])) = split_last_fields(cur.rest()) else {
        return false;
    };
    // The source must be separated from the weekday by whitespace.
    if !head.last().copied().is_some_and(is_ws) {
        return false;
    }

    is_source_token(trim_end_ws(head))
        && WEEKDAYS.contains(&dow)
        && MONTHS.contains(&mon)
        && number_in(day, 1..=31)
        && is_clock(time, true)
        && year.len() == 4
        && year.iter().all(u8::is_ascii_digit)
}

/// `Date: MM/DD/YY HH:MM am|pm`
pub fn is_date_line(line: &[u8]) -> bool {
    let mut cur = Cursor::new(line);
    if !cur.eat(DATE_PREFIX) || cur.skip_ws() == 0 {
        return false;
    }

    let Some((head, [date, time, meridiem])) = split_last_fields(cur.rest()) else {
        return false;
    };

    head.is_empty() && is_calendar_date(date) && is_clock(time, false) && is_meridiem(meridiem)
}

/// `Subject: <anything>`
///
/// The text after the keyword may be empty, but it may not carry a line
/// break anywhere except in trailing whitespace.
pub fn is_subject_line(line: &[u8]) -> bool {
    let mut cur = Cursor::new(line);
    if !cur.eat(SUBJECT_PREFIX) || cur.skip_ws() == 0 {
        return false;
    }
    !trim_end_ws(cur.rest())
        .iter()
        .any(|&b| b == b'\n' || b == b'\r')
}

fn is_source_token(source: &[u8]) -> bool {
    match source {
        [] => false,
        [b'"', inner @ .., b'"'] => !inner.iter().any(|&b| b == b'\n' || b == b'\r'),
        bare => !bare.iter().copied().any(is_ws),
    }
}

/// `MM/DD/YY` with month 01-12 and day 01-31.
fn is_calendar_date(field: &[u8]) -> bool {
    match field {
        [m1, m2, b'/', d1, d2, b'/', y1, y2] => {
            number_in(&[*m1, *m2], 1..=12)
                && number_in(&[*d1, *d2], 1..=31)
                && y1.is_ascii_digit()
                && y2.is_ascii_digit()
        }
        _ => false,
    }
}

/// `HH:MM`, or `HH:MM:SS` when `with_seconds`. Hours run 00-24.
fn is_clock(field: &[u8], with_seconds: bool) -> bool {
    match (field, with_seconds) {
        ([h1, h2, b':', m1, m2], false) => {
            number_in(&[*h1, *h2], 0..=24) && number_in(&[*m1, *m2], 0..=59)
        }
        ([h1, h2, b':', m1, m2, b':', s1, s2], true) => {
            number_in(&[*h1, *h2], 0..=24)
                && number_in(&[*m1, *m2], 0..=59)
                && number_in(&[*s1, *s2], 0..=59)
        }
        _ => false,
    }
}

fn is_meridiem(field: &[u8]) -> bool {
    field == b"am" || field == b"pm"
}

/// Two ASCII digits whose value lies in `range`.
fn number_in(field: &[u8], range: std::ops::RangeInclusive<u8>) -> bool {
    match field {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            range.contains(&((tens - b'0') * 10 + (ones - b'0')))
        }
        _ => false,
    }
}

/// Splits the last `N` whitespace-separated fields off `s`.
///
/// Returns the untouched head (with any whitespace that preceded the first
/// field) and the fields in order, or `None` if `s` has fewer than `N`
/// fields.
fn split_last_fields<const N: usize>(s: &[u8]) -> Option<(&[u8], [&[u8]; N])> {
    let empty: &[u8] = &[];
    let mut fields = [empty; N];
    let mut head = s;
    for slot in fields.iter_mut().rev() {
        let trimmed = trim_end_ws(head);
        if trimmed.is_empty() {
            return None;
        }
        let start = trimmed
            .iter()
            .rposition(|&b| is_ws(b))
            .map_or(0, |p| p + 1);
        *slot = &trimmed[start..];
        head = &trimmed[..start];
    }
    Some((head, fields))
}
