use std::collections::HashMap;

use chrono::Weekday;

use super::interval::Interval;
use super::policy::AgendaScope;

/// Intervals already committed to each instructor across the week.
///
/// Entries are created on first placement and only ever grow. The agenda does
/// not enforce non-overlap itself; callers check [`has_conflict`] before
/// calling [`record`].
///
/// [`has_conflict`]: InstructorAgenda::has_conflict
/// [`record`]: InstructorAgenda::record
#[derive(Debug, Clone, Default)]
pub struct InstructorAgenda {
    scope: AgendaScope,
    slots: HashMap<String, Vec<(Weekday, Interval)>>,
}

impl InstructorAgenda {
    pub fn new(scope: AgendaScope) -> Self {
        Self {
            scope,
            slots: HashMap::new(),
        }
    }

    /// Whether `candidate` on `day` overlaps anything recorded for `instructor`.
    ///
    /// Under [`AgendaScope::Week`] the day is ignored and intervals are
    /// compared by minute-of-day alone. Unknown instructors never conflict.
    pub fn has_conflict(&self, instructor: &str, day: Weekday, candidate: &Interval) -> bool {
        let Some(taken) = self.slots.get(instructor) else {
            return false;
        };
        taken.iter().any(|(taken_day, interval)| {
            let same_scope = match self.scope {
                AgendaScope::Week => true,
                AgendaScope::Day => *taken_day == day,
            };
            same_scope && interval.overlaps(candidate)
        })
    }

    /// Appends `interval` to the instructor's agenda without re-checking it.
    pub fn record(&mut self, instructor: &str, day: Weekday, interval: Interval) {
        self.slots
            .entry(instructor.to_string())
            .or_default()
            .push((day, interval));
    }

    /// Intervals recorded for `instructor`, in placement order.
    pub fn intervals(&self, instructor: &str) -> impl Iterator<Item = &(Weekday, Interval)> {
        self.slots.get(instructor).into_iter().flatten()
    }
}
