//! Plain value types held by the roster.

pub mod participant;

pub use participant::*;
