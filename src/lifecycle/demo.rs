use crate::model::Participant;
use crate::roster::{first_by_sorted_name_descending, OrderedRoster, RosterError};
use std::fmt;
use tracing::{info, info_span};

/// Names the demo roster is built from, in insertion order.
pub const DEMO_NAMES: [&str; 3] = ["멤버1", "멤버2", "멤버3"];

/// What the demo observed at each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// `view()` before anything was sorted.
    pub before: Vec<Participant>,
    /// The participant returned by the in-place sort.
    pub first_sorted: Participant,
    /// `view()` after sorting through `view_mut()`.
    pub after: Vec<Participant>,
}

/// Builds the demo roster, sorts it through its mutable view, and records
/// what a reader of the roster sees before and after.
pub fn run_demo() -> Result<DemoReport, RosterError> {
    let _span = info_span!("demo").entered();

    let members: Vec<Participant> = DEMO_NAMES.into_iter().map(Participant::new).collect();
    let mut roster = OrderedRoster::new(&members);

    let before = roster.snapshot();
    info!(size = before.len(), "Roster created");

    let first_sorted = first_by_sorted_name_descending(roster.view_mut())?.clone();
    info!(first = %first_sorted, "Sorted through mutable view");

    let after = roster.snapshot();
    info!(changed = (after != before), "Roster re-read");

    Ok(DemoReport {
        before,
        first_sorted,
        after,
    })
}

struct ListDisplay<'a>(&'a [Participant]);

impl fmt::Display for ListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, participant) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{participant}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "roster.view() = {}", ListDisplay(&self.before))?;
        writeln!(f, "first_sorted = {}", self.first_sorted)?;
        write!(f, "roster.view() = {}", ListDisplay(&self.after))
    }
}
