//! Cyclic eviction: removes the oldest unprotected content while keeping the
//! chunked log and the span index in lockstep.
//!
//! The walk visits spans oldest-first, mirroring every accounting decision
//! onto the log through a [`LogCursor`]: protected spans are skipped (their
//! chars stay physically in place), unprotected spans lose their oldest
//! chars until the quota is met. Offsets of all surviving spans are shifted
//! down as the walk proceeds, so the index is valid at every step.

use std::collections::HashSet;

use tracing::trace;

use crate::chunked_log::ChunkedLog;
use crate::span_index::SpanIndex;
use crate::types::{ContentKind, ContentSpan};

/// Removes up to `quota` chars of the oldest unprotected content.
///
/// Returns the number of chars actually removed. This can be less than
/// `quota` when the oldest content is dominated by protected spans: a
/// protected span is never consumed, in accounting or in storage, no matter
/// how far over budget the buffer is.
pub(crate) fn evict_front(
    log: &mut ChunkedLog,
    index: &mut SpanIndex,
    protected: &HashSet<ContentKind>,
    quota: usize,
) -> usize {
    if quota == 0 || index.is_empty() {
        return 0;
    }
    trace!(quota, len = log.len(), "starting cyclic trim");

    let mut removed = 0;
    let mut consumed = Vec::new();
    let mut cursor = log.cursor();
    let spans = index.spans_mut();

    for (i, span) in spans.iter_mut().enumerate() {
        // Earlier removals shift this span; apply before any decision so the
        // index stays valid at every intermediate step.
        span.start -= removed;
        span.end -= removed;

        if removed >= quota {
            continue;
        }

        let span_len = span.end - span.start;

        if protected.contains(&span.kind) {
            // Skipped, not consumed: the span stays anchored and its chars
            // stay in the log.
            cursor.skip(span_len);
            trace!(span = i, kind = ?span.kind, len = span_len, "skipping protected span");
            continue;
        }

        let take = span_len.min(quota - removed);
        cursor.remove(take);
        removed += take;
        if take == span_len {
            consumed.push(i);
            trace!(span = i, kind = ?span.kind, len = span_len, "span fully evicted");
        } else {
            // The span loses its oldest chars: the (already shifted) start
            // stays put and the length shrinks, leaving its newest chars
            // covered as before.
            span.end -= take;
            trace!(span = i, kind = ?span.kind, removed = take, "span partially evicted");
        }
    }

    // Reverse order keeps the collected indices stable during removal.
    for &i in consumed.iter().rev() {
        spans.remove(i);
    }

    restore_leading_cover(spans);

    trace!(removed, len = log.len(), "cyclic trim complete");
    removed
}

/// Re-establishes the gapless invariant if the first surviving span no
/// longer starts at offset 0.
///
/// The walk above cannot leave such a gap on its own (a span's start only
/// ever equals its predecessor's end), but the index self-heals rather than
/// propagating one: positions in front of the first survivor belong to a
/// protected span that was skipped, so the uncovered prefix is recorded as
/// unlinked user input.
fn restore_leading_cover(spans: &mut Vec<ContentSpan>) {
    if let Some(first) = spans.first() {
        if first.start > 0 {
            let cover = ContentSpan::new(ContentKind::UserInput, 0, first.start, None);
            spans.insert(0, cover);
        }
    }
}
