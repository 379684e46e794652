//! Ordered index of content spans covering the retained console text.
//!
//! The index is kept in lockstep with the chunked log: spans are contiguous
//! and gapless from offset 0 to the log length, never overlap, and their
//! lengths sum to the log length. Eviction (see `evict`) mutates both
//! structures in a single pass to preserve this.

use crate::types::{ContentKind, ContentSpan};

/// Ordered, contiguous, non-overlapping sequence of [`ContentSpan`]s.
#[derive(Debug, Default)]
pub struct SpanIndex {
    spans: Vec<ContentSpan>,
}

impl SpanIndex {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Offset one past the newest covered char.
    ///
    /// Equal to the log length whenever the two structures are in lockstep.
    pub fn end_offset(&self) -> usize {
        self.spans.last().map_or(0, |span| span.end)
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The spans, oldest first.
    pub fn spans(&self) -> &[ContentSpan] {
        &self.spans
    }

    /// Records `len` newly appended chars of the given kind.
    ///
    /// Adjacent unlinked runs of the same kind coalesce into a single span,
    /// so a process emitting output char-by-char does not bloat the index.
    /// Hyperlinked spans always stand alone: each keeps its own target.
    pub fn push(&mut self, kind: ContentKind, len: usize, link: Option<String>) {
        if len == 0 {
            return;
        }
        if link.is_none() {
            if let Some(last) = self.spans.last_mut() {
                if last.kind == kind && last.link.is_none() {
                    last.end += len;
                    return;
                }
            }
        }
        let start = self.end_offset();
        self.spans.push(ContentSpan::new(kind, start, start + len, link));
    }

    /// Discards all spans.
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    pub(crate) fn spans_mut(&mut self) -> &mut Vec<ContentSpan> {
        &mut self.spans
    }
}
