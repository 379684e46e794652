//! console-buffer: a bounded deferred-output buffer for process consoles.
//!
//! This crate sits between a high-rate producer (a reader draining a
//! process's output streams in many small chunks) and a slower consumer (a
//! renderer that periodically materializes accumulated text). It solves
//! three problems at once:
//!
//! - **Bounded memory.** With cyclic mode enabled, the oldest content is
//!   evicted once the configured capacity is exceeded. Text is stored as a
//!   sequence of fixed-capacity chunks, so a trim drops whole head chunks
//!   instead of shifting the entire retained tail, and many-small-writes
//!   workloads stay cheap.
//! - **Typed spans.** Alongside the raw text, an ordered, gapless index of
//!   [`ContentSpan`]s records which chars came from which logical source
//!   (stdout, stderr, system notices, echoed user input) and which carry a
//!   hyperlink target. Eviction keeps the index in lockstep with the text.
//! - **Protected input.** Content kinds in the protected set (user input by
//!   default) are never evicted, even when that keeps the buffer over
//!   budget. Echoed input is additionally mirrored into an independent
//!   pending-input buffer supporting cursor-style edits and line-oriented
//!   extraction for delivery to the process.
//!
//! # Example
//!
//! ```
//! use console_buffer::{ConsoleBuffer, ConsoleConfig, ContentKind};
//!
//! let mut console = ConsoleBuffer::new(ConsoleConfig {
//!     capacity: 10,
//!     chunk_size: 4,
//!     ..ConsoleConfig::default()
//! });
//!
//! let first = console.print("0123456789", ContentKind::Stdout, None);
//! assert_eq!(first.accepted, "0123456789");
//!
//! // Printing past capacity evicts the oldest output.
//! let second = console.print("ab", ContentKind::Stdout, None);
//! assert_eq!(second.evicted, 2);
//! assert_eq!(console.text(), "23456789ab");
//! ```
//!
//! # Concurrency
//!
//! There is none here. The buffer assumes a single-writer discipline:
//! producers hand off through an external queue, and one drain step calls
//! [`ConsoleBuffer::print`] for every queued write before reading back. All
//! operations are synchronous, non-blocking, and bounded by the data they
//! touch.

mod chunked_log;
mod config;
mod console_buffer;
mod error;
mod evict;
mod normalize;
mod span_index;
mod types;
mod user_input;

pub use config::{ConsoleConfig, DEFAULT_CAPACITY, DEFAULT_CHUNK_SIZE};
pub use console_buffer::ConsoleBuffer;
pub use error::UserInputError;
pub use types::{ContentKind, ContentSpan, PrintOutcome};
