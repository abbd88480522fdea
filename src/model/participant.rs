use serde::{Deserialize, Serialize};
use std::fmt;

/// A named member of an [`OrderedRoster`](crate::roster::OrderedRoster).
///
/// Participants are immutable once built: the name is fixed at construction and
/// only exposed through [`Participant::name`]. Equality and hashing are by name,
/// so two participants with the same name are interchangeable for comparison
/// purposes even though the roster keeps both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    name: String,
}

impl Participant {
    /// Creates a new participant.
    ///
    /// # Arguments
    /// * `name` - Display name, also used as the sort key
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Participant{{name='{}'}}", self.name)
    }
}
