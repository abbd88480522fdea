//! # Ordered Roster
//!
//! An owned, ordered sequence of [`Participant`]s and the operations that read
//! or reorder it.
//!
//! ## Aliasing Contract
//!
//! The roster never hands out copies unless asked to:
//!
//! - [`OrderedRoster::view`] borrows the live storage immutably.
//! - [`OrderedRoster::view_mut`] borrows the live storage mutably. Anything done
//!   through that borrow, such as [`first_by_sorted_name_descending`], reorders
//!   the roster itself.
//! - [`OrderedRoster::snapshot`] is the only accessor that copies.
//!
//! ```
//! use ordered_roster::model::Participant;
//! use ordered_roster::roster::{first_by_sorted_name_descending, OrderedRoster};
//!
//! let mut roster = OrderedRoster::new(&[Participant::new("a"), Participant::new("b")]);
//! let first = first_by_sorted_name_descending(roster.view_mut())?;
//! assert_eq!(first.name(), "b");
//! assert_eq!(roster.view()[0].name(), "b");
//! # Ok::<(), ordered_roster::roster::RosterError>(())
//! ```

pub mod error;
pub mod ordering;

pub use error::*;
pub use ordering::*;

use crate::model::Participant;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An ordered collection of participants that owns its backing store.
///
/// Insertion order is preserved and duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedRoster {
    participants: Vec<Participant>,
}

impl OrderedRoster {
    /// Creates a roster from a copy of `initial`.
    ///
    /// The roster does not alias `initial`: later changes to the caller's
    /// sequence are not seen by the roster, and vice versa.
    pub fn new(initial: &[Participant]) -> Self {
        debug!(size = initial.len(), "Creating roster");
        Self {
            participants: initial.to_vec(),
        }
    }

    /// Read-only view of the live backing sequence.
    pub fn view(&self) -> &[Participant] {
        &self.participants
    }

    /// Mutable view of the live backing sequence.
    ///
    /// This is not a copy. Sorting or swapping through the returned slice
    /// reorders the roster, and the next [`view`](Self::view) shows it.
    ///
    /// # Concurrency
    /// The roster has no internal synchronization. If it is ever shared across
    /// threads, the caller must hold an external lock for as long as this
    /// borrow is alive.
    pub fn view_mut(&mut self) -> &mut [Participant] {
        &mut self.participants
    }

    /// Owned copy of the current order, detached from the roster.
    pub fn snapshot(&self) -> Vec<Participant> {
        self.participants.clone()
    }

    /// Sorts the roster by name, descending, and returns the new head.
    ///
    /// Shorthand for `first_by_sorted_name_descending(self.view_mut())`.
    pub fn sort_by_name_descending(&mut self) -> Result<&Participant, RosterError> {
        first_by_sorted_name_descending(self.view_mut())
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl FromIterator<Participant> for OrderedRoster {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self {
            participants: iter.into_iter().collect(),
        }
    }
}
