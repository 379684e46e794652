//! Core value types shared across the console buffer.

/// The semantic kind of a run of console text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Standard output of the attached process.
    Stdout,
    /// Error output of the attached process.
    Stderr,
    /// Messages produced by the console itself (banners, exit notices).
    System,
    /// Interactive input typed by the user and echoed back for display.
    UserInput,
}

/// A contiguous run of buffer positions sharing one content kind and an
/// optional hyperlink target.
///
/// Offsets are char counts relative to the logical start of the retained
/// text: offset 0 is the oldest retained char, so cyclic eviction shifts
/// every surviving span toward zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSpan {
    pub kind: ContentKind,
    pub start: usize,
    pub end: usize,
    /// Navigation target for hyperlinked text (a file location or URL).
    pub link: Option<String>,
}

impl ContentSpan {
    pub fn new(kind: ContentKind, start: usize, end: usize, link: Option<String>) -> Self {
        Self {
            kind,
            start,
            end,
            link,
        }
    }

    /// Number of chars covered by this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Outcome of a [`ConsoleBuffer::print`](crate::ConsoleBuffer::print) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOutcome {
    /// The text actually stored, after capacity truncation and line-separator
    /// normalization. Empty when the buffer had no room for any of it.
    pub accepted: String,
    /// How many previously stored chars were evicted to make room. A caller
    /// maintaining offset-based views of the buffer must shift them down by
    /// exactly this amount.
    pub evicted: usize,
}
