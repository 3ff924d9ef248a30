#[allow(unused_imports)]
use crate::prelude::*;

use lsp_types::{Position, Range, TextDocumentContentChangeEvent};
use progressive_core::Span;
use ropey::Rope;

pub trait RopePositions {
    fn check_line_bounds(&self, line: usize) -> bool;
    fn line_len_without_break(&self, line: usize) -> usize;
    fn position_to_char(&self, position: Position) -> Option<usize>;
    fn range_to_span(&self, range: &Range) -> Option<Span>;
}

impl RopePositions for Rope {
    /// Check if a line index is within bounds
    fn check_line_bounds(&self, line: usize) -> bool {
        line < self.len_lines()
    }

    /// Length in chars of `line`, not counting its line break
    fn line_len_without_break(&self, line: usize) -> usize {
        let slice = self.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        } else if len > 0 && slice.char(len - 1) == '\r' {
            len -= 1;
        }
        len
    }

    /// Convert an LSP position, counted in UTF-16 code units, to a char index.
    /// A character past the end of its line is clamped to the line end, a
    /// line past the end of the document gives `None`.
    fn position_to_char(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        if !self.check_line_bounds(line) {
            return None;
        }
        let line_start = self.line_to_char(line);
        let line_start_cu = self.char_to_utf16_cu(line_start);
        let line_end_cu = self.char_to_utf16_cu(line_start + self.line_len_without_break(line));
        let character = (position.character as usize).min(line_end_cu - line_start_cu);
        Some(self.utf16_cu_to_char(line_start_cu + character))
    }

    /// Convert an LSP range to a char span, ordered start to end
    fn range_to_span(&self, range: &Range) -> Option<Span> {
        let start = self.position_to_char(range.start)?;
        let end = self.position_to_char(range.end)?;
        Some(Span::new(start.min(end), start.max(end)))
    }
}

pub trait RopeApplyChange {
    fn apply_change(&mut self, change: &TextDocumentContentChangeEvent) -> Result<()>;
}

impl RopeApplyChange for Rope {
    /// Apply one `didChange` content change. A change without a range
    /// replaces the whole document.
    fn apply_change(&mut self, change: &TextDocumentContentChangeEvent) -> Result<()> {
        let Some(range) = change.range else {
            *self = Rope::from_str(&change.text);
            return Ok(());
        };
        let span = self
            .range_to_span(&range)
            .ok_or(Error::OutOfBounds(range.start.line as usize))?;
        self.remove(span.start..span.end);
        self.insert(span.start, change.text.as_str());
        Ok(())
    }
}
