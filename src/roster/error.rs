//! Error types for roster operations.

use thiserror::Error;

/// Errors that can occur while reordering or picking from a roster sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// The sequence had no elements, so there is no position 0 to return.
    #[error("cannot pick the first participant of an empty sequence")]
    EmptyInput,
}
