//! Console buffer configuration.

use std::collections::HashSet;

use crate::types::ContentKind;

/// Default chunk granularity for the deferred-output log.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Default retained capacity, in chars.
pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

/// Configuration for a [`ConsoleBuffer`](crate::ConsoleBuffer) instance.
///
/// Supplied at construction and immutable thereafter, with one exception:
/// the protected-kind set can be swapped at runtime via
/// [`ConsoleBuffer::set_protected_kinds`](crate::ConsoleBuffer::set_protected_kinds).
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// When false, capacity is never enforced and the buffer grows without
    /// bound.
    pub cyclic: bool,
    /// Maximum retained length (chars) once cyclic eviction is enabled.
    pub capacity: usize,
    /// Storage granularity for the deferred-output log. Smaller chunks make
    /// front-trims cheaper but add per-chunk overhead. Must be positive.
    pub chunk_size: usize,
    /// Content kinds exempt from cyclic eviction.
    pub protected_kinds: HashSet<ContentKind>,
    /// Whether line-ending normalization preserves a lone carriage return
    /// (some interactive programs redraw a progress line with bare `\r`).
    pub keep_carriage_return: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            cyclic: true,
            capacity: DEFAULT_CAPACITY,
            chunk_size: DEFAULT_CHUNK_SIZE,
            protected_kinds: HashSet::from([ContentKind::UserInput]),
            keep_carriage_return: true,
        }
    }
}
