//! Finding the number a bare caret refers to.

use crate::span::Span;
use crate::token::number;

/// Locate the number touching `caret` on `line`.
///
/// A number ending exactly at the caret wins over one starting at the caret.
/// `caret` and the returned span are byte offsets into `line`; a caret that
/// is past the end of the line or not on a char boundary finds nothing.
pub fn locate_adjacent(line: &str, caret: usize, negative_numbers: bool) -> Option<Span> {
    if !line.is_char_boundary(caret) {
        return None;
    }
    number_before(line, caret, negative_numbers)
        .or_else(|| number_after(line, caret, negative_numbers))
}

/// `-?[0-9]+$` on `line[..caret]`
fn number_before(line: &str, caret: usize, negative_numbers: bool) -> Option<Span> {
    let before = &line[..caret];
    let digits = before
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    let mut start = caret - digits;
    if negative_numbers && before[..start].ends_with('-') {
        start -= 1;
    }
    Some(Span::new(start, caret))
}

/// `^-?[0-9]+` on `line[caret..]`
fn number_after(line: &str, caret: usize, negative_numbers: bool) -> Option<Span> {
    let (_, literal) = number(&line[caret..], negative_numbers).ok()?;
    Some(Span::new(caret, caret + literal.len()))
}
