//! Name ordering over participant sequences.
//!
//! Names compare with `str`'s [`Ord`], i.e. byte-wise over UTF-8, which is the
//! same as Unicode scalar value order. Both functions here agree on which
//! participant comes "first": the greatest name, and among equal greatest names
//! the one that appeared earliest in the input.

use crate::model::Participant;
use crate::roster::RosterError;
use tracing::{debug, warn};

/// Anything that carries a sortable name.
///
/// [`Participant`] is the only implementor in this crate; the ordering functions
/// are generic so callers can order richer records by the same rule.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Participant {
    fn name(&self) -> &str {
        Participant::name(self)
    }
}

/// Sorts `participants` in place by name, descending, and returns the new head.
///
/// The sort is stable: participants with equal names keep their relative order.
///
/// # Side Effects
/// The slice is permuted. If it is a view into an
/// [`OrderedRoster`](crate::roster::OrderedRoster) (see
/// [`view_mut`](crate::roster::OrderedRoster::view_mut)), the roster itself is
/// reordered and every later read observes the new order.
///
/// # Errors
/// [`RosterError::EmptyInput`] if the slice has no elements.
pub fn first_by_sorted_name_descending<N: Named>(
    participants: &mut [N],
) -> Result<&N, RosterError> {
    debug!(size = participants.len(), "Sorting by name (descending, in place)");

    participants.sort_by(|a, b| b.name().cmp(a.name()));

    participants.first().ok_or_else(|| {
        warn!("Sort requested on an empty sequence");
        RosterError::EmptyInput
    })
}

/// Returns the participant that [`first_by_sorted_name_descending`] would put
/// first, without touching the slice.
pub fn first_by_name_descending<N: Named>(participants: &[N]) -> Result<&N, RosterError> {
    debug!(size = participants.len(), "Finding greatest name");

    participants
        .iter()
        .reduce(|best, p| if p.name() > best.name() { p } else { best })
        .ok_or(RosterError::EmptyInput)
}
