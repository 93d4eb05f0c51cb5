//! Offset to line/column resolution.
//!
//! Most diagnostics are raised at a token boundary the parser has already
//! positioned, so [`resolve`] first checks the four token anchors in
//! [`TokenAnchors`] and only scans the source text when none of them match.
//!
//! The scan recognises `\n`, `\r\n`, a lone `\r`, U+2028 and U+2029 as line
//! terminators. See [`crate::position`] for the offset and column units.

use log::trace;

use crate::position::{Offset, Position};

/// A token boundary whose position is already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    offset: Offset,
    position: Position,
}

impl Anchor {
    /// Create an anchor at `offset` with its precomputed `position`.
    pub fn new(offset: Offset, position: Position) -> Self {
        Self { offset, position }
    }

    /// Create an anchor by resolving `offset` against `source`.
    pub fn scanned(source: &str, offset: Offset) -> Self {
        Self::new(offset, scan(source, offset))
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Identifies one of the four anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// Start of the current token.
    Start,
    /// Start of the previous token.
    LastTokenStart,
    /// End of the current token.
    End,
    /// End of the previous token.
    LastTokenEnd,
}

/// Positions of the current and previous token boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenAnchors {
    start: Anchor,
    end: Anchor,
    last_token_start: Anchor,
    last_token_end: Anchor,
}

impl TokenAnchors {
    pub fn new(
        start: Anchor,
        end: Anchor,
        last_token_start: Anchor,
        last_token_end: Anchor,
    ) -> Self {
        Self {
            start,
            end,
            last_token_start,
            last_token_end,
        }
    }

    /// Move to the next token: the current boundaries become the previous
    /// ones and `start`/`end` become current.
    pub fn advance(&mut self, start: Anchor, end: Anchor) {
        self.last_token_start = self.start;
        self.last_token_end = self.end;
        self.start = start;
        self.end = end;
    }

    pub fn get(&self, kind: AnchorKind) -> Anchor {
        match kind {
            AnchorKind::Start => self.start,
            AnchorKind::LastTokenStart => self.last_token_start,
            AnchorKind::End => self.end,
            AnchorKind::LastTokenEnd => self.last_token_end,
        }
    }

    /// Find the first anchor sitting exactly at `offset`.
    ///
    /// Anchors are checked in the order current start, previous start,
    /// current end, previous end.
    pub fn find(&self, offset: Offset) -> Option<(AnchorKind, Position)> {
        [
            AnchorKind::Start,
            AnchorKind::LastTokenStart,
            AnchorKind::End,
            AnchorKind::LastTokenEnd,
        ]
        .into_iter()
        .map(|kind| (kind, self.get(kind)))
        .find(|(_, anchor)| anchor.offset == offset)
        .map(|(kind, anchor)| (kind, anchor.position))
    }
}

/// How a position was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Taken unchanged from an anchor.
    Anchor(AnchorKind),
    /// Computed by scanning the source text.
    Scan,
}

/// A resolved position together with how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub position: Position,
    pub lookup: Lookup,
}

/// Resolve `offset` to a line/column position.
///
/// Identical inputs always produce the same position.
pub fn resolve(offset: Offset, anchors: &TokenAnchors, source: &str) -> Position {
    locate(offset, anchors, source).position
}

/// Like [`resolve`], but also reports whether an anchor or a scan was used.
pub fn locate(offset: Offset, anchors: &TokenAnchors, source: &str) -> Located {
    if let Some((kind, position)) = anchors.find(offset) {
        trace!(offset, anchor:? = kind; "Resolved offset from anchor");
        return Located {
            position,
            lookup: Lookup::Anchor(kind),
        };
    }

    let position = scan(source, offset);
    trace!(
        offset,
        line = position.line(),
        column = position.column();
        "Resolved offset by scan"
    );
    Located {
        position,
        lookup: Lookup::Scan,
    }
}

/// Compute the position of `offset` by walking `source` from the beginning.
///
/// Only characters that end at or before `offset` are consumed. A `\r\n`
/// pair split by `offset` counts its `\r` as a lone terminator. Offsets past
/// the end of `source` land on the last line with the column running past it.
pub fn scan(source: &str, offset: Offset) -> Position {
    #[cfg(test)]
    scan_counter::bump();

    let mut line = 1;
    let mut line_start = 0;
    let mut chars = source.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let next = idx + ch.len_utf8();
        if next > offset {
            break;
        }

        match ch {
            '\r' => {
                line += 1;
                line_start = next;
                if next < offset && matches!(chars.peek(), Some(&(_, '\n'))) {
                    chars.next();
                    line_start = next + 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {
                line += 1;
                line_start = next;
            }
            _ => {}
        }
    }

    Position::new(line, offset - line_start)
}

#[cfg(test)]
pub(crate) mod scan_counter {
    use std::cell::Cell;

    thread_local! {
        static SCANS: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn bump() {
        SCANS.with(|scans| scans.set(scans.get() + 1));
    }

    /// Number of scans performed on this thread so far.
    pub(crate) fn get() -> usize {
        SCANS.with(|scans| scans.get())
    }
}
