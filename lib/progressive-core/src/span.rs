/// A half-open `[start, end)` range of offsets into a text.
///
/// The unit of the offsets is whatever the [`TextSource`](crate::TextSource)
/// that interprets the span uses: bytes for `str`, chars for a rope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-length span, i.e. a bare caret.
    #[inline]
    pub const fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the two spans share at least one offset.
    #[inline]
    pub const fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Move the span right by `by`.
    #[inline]
    pub const fn shift(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }
}
