//! ConsoleBuffer: the facade composing the chunked log, the span index,
//! cyclic eviction, and the pending user-input buffer.

use std::collections::HashSet;

use crate::chunked_log::ChunkedLog;
use crate::config::ConsoleConfig;
use crate::error::UserInputError;
use crate::evict::evict_front;
use crate::normalize::convert_line_separators;
use crate::span_index::SpanIndex;
use crate::types::{ContentKind, ContentSpan, PrintOutcome};
use crate::user_input::UserInputBuffer;

/// A bounded deferred-output buffer for an embedded process console.
///
/// Sits between a process-output reader, which may produce many small
/// classified chunks of text, and a renderer that periodically drains the
/// accumulated text for presentation. When cyclic mode is enabled, retained
/// memory is capped by evicting the oldest unprotected content; interactive
/// input is exempt from eviction and additionally mirrored into a
/// pending-input buffer until it is delivered to the process.
///
/// Not internally synchronized: every producer must hand off through an
/// external queue and all calls must be serialized by the caller.
#[derive(Debug)]
pub struct ConsoleBuffer {
    log: ChunkedLog,
    index: SpanIndex,
    user_input: UserInputBuffer,
    cyclic: bool,
    capacity: usize,
    protected_kinds: HashSet<ContentKind>,
    keep_carriage_return: bool,
}

impl ConsoleBuffer {
    /// Creates an empty console buffer with the given configuration.
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            log: ChunkedLog::new(config.chunk_size),
            index: SpanIndex::new(),
            user_input: UserInputBuffer::new(),
            cyclic: config.cyclic,
            capacity: config.capacity,
            protected_kinds: config.protected_kinds,
            keep_carriage_return: config.keep_carriage_return,
        }
    }

    // ==================== Accessors ====================

    /// Total retained chars of console output.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Materializes the retained text, oldest char first.
    pub fn text(&self) -> String {
        self.log.to_string()
    }

    /// Snapshot of the span index, oldest span first.
    pub fn spans(&self) -> Vec<ContentSpan> {
        self.index.spans().to_vec()
    }

    /// Replaces the set of content kinds exempt from cyclic eviction.
    ///
    /// User input is protected by default; callers can widen the set (e.g.
    /// to also pin system notices) or narrow it.
    pub fn set_protected_kinds(&mut self, kinds: HashSet<ContentKind>) {
        self.protected_kinds = kinds;
    }

    // ==================== Printing ====================

    /// Stores `text` with the given content kind and optional hyperlink
    /// target.
    ///
    /// For unprotected kinds, cyclic eviction runs first when the incoming
    /// text would push the buffer past capacity; if the text still does not
    /// fit afterwards, only its newest tail is accepted and the rest is
    /// dropped without being stored or spanned. Protected kinds always
    /// append in full and never trigger eviction, though they do count
    /// toward the length used by future capacity checks.
    ///
    /// Line separators in the accepted text are normalized after the
    /// capacity math: the eviction quota is computed from the incoming
    /// length as received, so a collapsed `\r\n` can leave the buffer
    /// slightly under capacity.
    pub fn print(&mut self, text: &str, kind: ContentKind, link: Option<String>) -> PrintOutcome {
        let incoming = text.chars().count();
        let (admitted, evicted) = if self.protected_kinds.contains(&kind) {
            (incoming, 0)
        } else {
            self.make_room_for(incoming)
        };

        if admitted == 0 {
            return PrintOutcome {
                accepted: String::new(),
                evicted,
            };
        }

        // Keep the newest tail when the text does not fit in full.
        let tail: String;
        let to_store = if admitted < incoming {
            tail = text.chars().skip(incoming - admitted).collect();
            tail.as_str()
        } else {
            text
        };

        let accepted = convert_line_separators(to_store, self.keep_carriage_return);

        self.log.append(&accepted);
        self.index.push(kind, accepted.chars().count(), link);

        if kind == ContentKind::UserInput {
            self.user_input.push_str(&accepted);
        }

        #[cfg(debug_assertions)]
        self.assert_in_sync();

        PrintOutcome { accepted, evicted }
    }

    /// Evicts old content to admit `incoming` chars.
    ///
    /// Returns how many of the incoming chars the buffer will accept and
    /// how many stored chars were removed to get there.
    fn make_room_for(&mut self, incoming: usize) -> (usize, usize) {
        if !self.cyclic || self.log.len() + incoming <= self.capacity {
            return (incoming, 0);
        }

        let quota = (self.log.len() + incoming - self.capacity).min(self.log.len());
        let removed = evict_front(&mut self.log, &mut self.index, &self.protected_kinds, quota);

        // Protected content may have kept the buffer over budget; admit only
        // the tail of the incoming text that still fits.
        let len = self.log.len();
        if len + incoming > self.capacity {
            (self.capacity.saturating_sub(len), removed)
        } else {
            (incoming, removed)
        }
    }

    // ==================== Clearing ====================

    /// Discards all retained output and spans.
    ///
    /// The pending user input survives unless `reset_user_input` is set:
    /// undelivered input is normally still owed to the process even when
    /// the display is wiped.
    pub fn clear(&mut self, reset_user_input: bool) {
        self.log.clear();
        self.index.clear();
        if reset_user_input {
            self.user_input = UserInputBuffer::new();
        }
    }

    // ==================== User input ====================

    /// Chars of input pending delivery to the process.
    pub fn user_input_len(&self) -> usize {
        self.user_input.len()
    }

    /// Snapshot of the pending input.
    pub fn user_input(&self) -> String {
        self.user_input.to_string()
    }

    /// Inserts typed text at a char offset into the pending input.
    pub fn insert_user_input(&mut self, offset: usize, text: &str) -> Result<(), UserInputError> {
        self.user_input.insert(offset, text)
    }

    /// Removes `[start, end)` from the pending input, clamping both bounds.
    pub fn remove_user_input(&mut self, start: usize, end: usize) {
        self.user_input.remove(start, end);
    }

    /// Replaces `[start, end)` of the pending input with `text`.
    pub fn replace_user_input(
        &mut self,
        start: usize,
        end: usize,
        text: &str,
    ) -> Result<(), UserInputError> {
        self.user_input.replace(start, end, text)
    }

    /// Cuts the deliverable portion of the pending input: everything up to
    /// and including the last line separator typed so far. Returns `None`
    /// when no complete line exists yet.
    pub fn cut_first_user_input_line(&mut self) -> Option<String> {
        self.user_input.cut_first_line()
    }

    // ==================== Debug checks ====================

    /// Verifies the log/index lockstep invariants (debug builds only).
    #[cfg(debug_assertions)]
    fn assert_in_sync(&self) {
        let mut expected_start = 0;
        for span in self.index.spans() {
            debug_assert_eq!(span.start, expected_start, "span index must be gapless");
            debug_assert!(span.end >= span.start, "span must not be inverted");
            expected_start = span.end;
        }
        debug_assert_eq!(
            expected_start,
            self.log.len(),
            "span coverage must match log length"
        );
    }
}

impl Default for ConsoleBuffer {
    /// An empty console buffer with the default configuration.
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}
