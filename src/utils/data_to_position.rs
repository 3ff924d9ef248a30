use lsp_types::{Position, Range};
use progressive_core::Span;

/// Char-offset spans to LSP positions, counted in UTF-16 code units.
pub trait ToPosition {
    fn to_position_start(&self, rope: &ropey::Rope) -> Position;
    fn to_position_end(&self, rope: &ropey::Rope) -> Position;
    fn to_range(&self, rope: &ropey::Rope) -> Range;
}

impl ToPosition for Span {
    fn to_position_start(&self, rope: &ropey::Rope) -> Position {
        let (line, character) = to_line_char(self.start, rope);
        Position { line, character }
    }

    fn to_position_end(&self, rope: &ropey::Rope) -> Position {
        let (line, character) = to_line_char(self.end, rope);
        Position { line, character }
    }

    fn to_range(&self, rope: &ropey::Rope) -> Range {
        Range {
            start: self.to_position_start(rope),
            end: self.to_position_end(rope),
        }
    }
}

pub fn to_line_char(chix: usize, rope: &ropey::Rope) -> (u32, u32) {
    let line = rope.char_to_line(chix);
    let character = rope.char_to_utf16_cu(chix) - rope.char_to_utf16_cu(rope.line_to_char(line));
    (line as u32, character as u32)
}
