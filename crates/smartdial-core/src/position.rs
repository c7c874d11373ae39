// crates/smartdial-core/src/position.rs
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` range of character indices in a display name
/// or raw phone number, marking a highlighted match.
///
/// Indices count `char`s of the original, un-normalized string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchPosition {
    pub start: usize,
    pub end: usize,
}

impl MatchPosition {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shifts the range right by `offset` characters.
    pub fn advance(&mut self, offset: usize) {
        self.start += offset;
        self.end += offset;
    }

    /// Slice of `chars` covered by this position, clamped to its length.
    pub fn slice<'a>(&self, chars: &'a [char]) -> &'a [char] {
        let end = self.end.min(chars.len());
        let start = self.start.min(end);
        &chars[start..end]
    }
}

/// Shifts every position in the list by `offset`.
///
/// Used when a sub-match computed on a suffix of a name is merged back into
/// the coordinates of the whole name.
pub fn advance_match_positions(positions: &mut [MatchPosition], offset: usize) {
    for pos in positions {
        pos.advance(offset);
    }
}

/// A `'0'`/`'1'` string of `len` characters with `'1'` under every index
/// covered by one of `positions`. Ranges past `len` are clipped.
///
/// ```rust
/// use smartdial_core::{highlight_mask, MatchPosition};
///
/// let mask = highlight_mask(10, &[MatchPosition::new(0, 1), MatchPosition::new(5, 6)]);
/// assert_eq!(mask, "1000010000");
/// ```
pub fn highlight_mask(len: usize, positions: &[MatchPosition]) -> String {
    let mut mask = vec![b'0'; len];
    for pos in positions {
        let end = pos.end.min(len);
        for bit in mask.iter_mut().take(end).skip(pos.start) {
            *bit = b'1';
        }
    }
    // Only ASCII '0'/'1' were written.
    String::from_utf8(mask).unwrap_or_default()
}
