use std::fmt;

use serde::{Deserialize, Serialize};

/// What the packer does with a class whose instructor is already busy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Drop the class for the rest of the week.
    #[default]
    Skip,
    /// Hold the class back and retry it at the start of the next shift.
    Defer,
}

/// Which recorded intervals count when checking an instructor for overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgendaScope {
    /// Compare minute-of-day against every day of the week.
    #[default]
    Week,
    /// Compare only against intervals on the same day.
    Day,
}

/// Knobs of the greedy placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementPolicy {
    pub on_conflict: ConflictPolicy,
    pub agenda_scope: AgendaScope,
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictPolicy::Skip => write!(f, "skip"),
            ConflictPolicy::Defer => write!(f, "defer"),
        }
    }
}

impl fmt::Display for AgendaScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgendaScope::Week => write!(f, "week"),
            AgendaScope::Day => write!(f, "day"),
        }
    }
}
