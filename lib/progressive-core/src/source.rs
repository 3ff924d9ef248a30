use std::borrow::Cow;

use crate::locate::locate_adjacent;
use crate::span::Span;

/// A document the batch reads spans from.
pub trait TextSource {
    /// Text covered by `span`, or `None` when the span is out of bounds.
    fn slice_text(&self, span: Span) -> Option<Cow<'_, str>>;

    /// The number touching the caret at `offset`, searched on the caret's
    /// line only.
    fn adjacent_number(&self, offset: usize, negative_numbers: bool) -> Option<Span>;
}

/// Byte offsets.
impl TextSource for str {
    fn slice_text(&self, span: Span) -> Option<Cow<'_, str>> {
        self.get(span.start..span.end).map(Cow::Borrowed)
    }

    fn adjacent_number(&self, offset: usize, negative_numbers: bool) -> Option<Span> {
        let before = self.get(..offset)?;
        let line_start = before.rfind('\n').map_or(0, |ix| ix + 1);
        let line_end = self[offset..]
            .find('\n')
            .map_or(self.len(), |ix| offset + ix);
        let line = &self[line_start..line_end];
        locate_adjacent(line, offset - line_start, negative_numbers)
            .map(|span| span.shift(line_start))
    }
}

/// Char offsets.
#[cfg(feature = "ropey")]
impl TextSource for ropey::Rope {
    fn slice_text(&self, span: Span) -> Option<Cow<'_, str>> {
        if span.start > span.end {
            return None;
        }
        self.get_slice(span.start..span.end).map(Cow::from)
    }

    fn adjacent_number(&self, offset: usize, negative_numbers: bool) -> Option<Span> {
        if offset > self.len_chars() {
            return None;
        }
        let line_ix = self.char_to_line(offset);
        let line_start = self.line_to_char(line_ix);
        let line = self.line(line_ix);
        let text: Cow<'_, str> = line.into();
        let caret = line.char_to_byte(offset - line_start);
        let found = locate_adjacent(&text, caret, negative_numbers)?;
        Some(Span::new(
            line_start + line.byte_to_char(found.start),
            line_start + line.byte_to_char(found.end),
        ))
    }
}
