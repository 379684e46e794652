//! Error type for user-input range edits.

use thiserror::Error;

/// Errors surfaced by offset-addressed user-input edits.
///
/// Out-of-range offsets on insert/replace are caller programming errors.
/// Silently clamping them would corrupt cursor-relative editing, so they are
/// surfaced instead; plain removal clamps (see
/// [`ConsoleBuffer::remove_user_input`](crate::ConsoleBuffer::remove_user_input)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserInputError {
    /// The requested range lies outside the current user-input contents.
    #[error("range {start}..{end} is out of bounds for user input of length {len}")]
    OutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },
}
