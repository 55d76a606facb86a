//! Source locations of tokens.

/// Byte offsets `start..end` of a token in the text it was scanned from.
///
/// Diagnostics label this range, so it must lie on `char` boundaries of
/// that text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span {}..{} runs backwards", start, end);
        Self { start, end }
    }

    /// A zero-width span, as used for end of input.
    pub fn empty(pos: u32) -> Self {
        Self::new(pos, pos)
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start as usize..span.end as usize
    }
}
