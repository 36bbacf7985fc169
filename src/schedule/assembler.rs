use tracing::{debug, info};

use super::agenda::InstructorAgenda;
use super::class::ClassRecord;
use super::entry::{Schedule, ScheduleEntry};
use super::packer::ShiftPacker;
use super::policy::PlacementPolicy;
use super::queue::PendingQueue;
use super::shift::{MEETING_MINUTE, Shift, WEEKDAYS, day_name};

/// Builds the week day by day, two shifts per day, closing each day with the
/// faculty meeting.
///
/// Stops after the first day that leaves nothing pending. The agenda lives for
/// the whole call and is shared by every day and shift.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekAssembler {
    policy: PlacementPolicy,
}

impl WeekAssembler {
    pub fn new(policy: PlacementPolicy) -> Self {
        Self { policy }
    }

    pub fn assemble(&self, classes: &[ClassRecord]) -> Schedule {
        let packer = ShiftPacker::new(self.policy.on_conflict);
        let mut queue = PendingQueue::new(classes);
        let mut agenda = InstructorAgenda::new(self.policy.agenda_scope);
        let mut entries = Vec::new();

        for day in WEEKDAYS {
            entries.push(ScheduleEntry::Header { day });

            for shift in [Shift::MORNING, Shift::AFTERNOON] {
                queue.restore_deferred();
                let cursor = packer.pack(&mut queue, day, shift, &mut agenda, &mut entries);
                debug!(day = day_name(day), %shift, cursor, "shift packed");
            }

            entries.push(ScheduleEntry::Meeting {
                day,
                start: MEETING_MINUTE,
            });

            if queue.is_exhausted() {
                break;
            }
        }

        queue.restore_deferred();
        let schedule = Schedule {
            entries,
            skipped: queue.skipped().iter().map(|c| (*c).clone()).collect(),
            unplaced: queue.remaining().cloned().collect(),
        };
        info!(
            placed = schedule.class_count(),
            skipped = schedule.skipped.len(),
            unplaced = schedule.unplaced.len(),
            days = schedule.days().len(),
            "week assembled"
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::schedule::policy::{AgendaScope, ConflictPolicy};

    fn class(subject: &str, instructor: &str, minutes: u32) -> ClassRecord {
        ClassRecord::new(subject, instructor, minutes).unwrap()
    }

    fn placements(schedule: &Schedule) -> Vec<(Weekday, u32, String)> {
        schedule
            .entries
            .iter()
            .filter_map(|e| match e {
                ScheduleEntry::Class {
                    day,
                    start,
                    subject,
                    ..
                } => Some((*day, *start, subject.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_class_emits_one_day() {
        let schedule = WeekAssembler::default().assemble(&[class("Matemática", "Silva", 60)]);
        assert_eq!(
            schedule.entries,
            vec![
                ScheduleEntry::Header { day: Weekday::Mon },
                ScheduleEntry::class(Weekday::Mon, 540, &class("Matemática", "Silva", 60)),
                ScheduleEntry::Meeting {
                    day: Weekday::Mon,
                    start: 1020
                },
            ]
        );
    }

    #[test]
    fn empty_input_still_emits_monday() {
        let schedule = WeekAssembler::default().assemble(&[]);
        assert_eq!(schedule.days(), vec![Weekday::Mon]);
        assert_eq!(schedule.entries.len(), 2);
    }

    #[test]
    fn morning_overflow_carries_to_afternoon() {
        let classes = vec![class("A", "X", 120), class("B", "Y", 120)];
        let schedule = WeekAssembler::default().assemble(&classes);
        assert_eq!(
            placements(&schedule),
            vec![
                (Weekday::Mon, 540, "A".to_string()),
                (Weekday::Mon, 780, "B".to_string())
            ]
        );
        assert_eq!(schedule.days(), vec![Weekday::Mon]);
    }

    #[test]
    fn cross_day_collision_skips_class() {
        let classes = vec![
            class("A", "X", 60),
            class("F1", "Y", 120),
            class("F2", "Z", 240),
            class("B", "X", 30),
        ];
        let schedule = WeekAssembler::default().assemble(&classes);
        assert_eq!(
            placements(&schedule),
            vec![
                (Weekday::Mon, 540, "A".to_string()),
                (Weekday::Mon, 600, "F1".to_string()),
                (Weekday::Mon, 780, "F2".to_string()),
            ]
        );
        assert_eq!(schedule.skipped, vec![class("B", "X", 30)]);
        assert!(schedule.unplaced.is_empty());
        assert_eq!(schedule.days(), vec![Weekday::Mon, Weekday::Tue]);
    }

    #[test]
    fn day_scope_places_cross_day_class() {
        let classes = vec![
            class("A", "X", 60),
            class("F1", "Y", 120),
            class("F2", "Z", 240),
            class("B", "X", 30),
        ];
        let policy = PlacementPolicy {
            agenda_scope: AgendaScope::Day,
            ..Default::default()
        };
        let schedule = WeekAssembler::new(policy).assemble(&classes);
        assert!(placements(&schedule).contains(&(Weekday::Tue, 540, "B".to_string())));
        assert!(schedule.skipped.is_empty());
    }

    #[test]
    fn unfittable_class_runs_the_whole_week() {
        let schedule = WeekAssembler::default().assemble(&[class("Seminário", "Z", 500)]);
        assert_eq!(schedule.days(), WEEKDAYS.to_vec());
        assert_eq!(schedule.class_count(), 0);
        assert_eq!(schedule.entries.len(), 10);
        assert_eq!(schedule.unplaced, vec![class("Seminário", "Z", 500)]);
    }

    #[test]
    fn defer_places_class_blocked_across_days() {
        // X teaches 09:00-10:00 Monday. On Tuesday the next X class would
        // start at 09:00 and collide; skip drops it, defer retries it later.
        let classes = vec![
            class("A", "X", 60),
            class("F1", "Y", 120),
            class("F2", "Z", 240),
            class("B", "X", 30),
            class("C", "W", 60),
        ];
        let skip = WeekAssembler::default().assemble(&classes);
        assert!(!placements(&skip).iter().any(|(_, _, s)| s == "B"));

        let policy = PlacementPolicy {
            on_conflict: ConflictPolicy::Defer,
            ..Default::default()
        };
        let defer = WeekAssembler::new(policy).assemble(&classes);
        // Tuesday morning: B deferred, C at 09:00. Afternoon: B at 13:00.
        assert_eq!(
            placements(&defer)[3..],
            [
                (Weekday::Tue, 540, "C".to_string()),
                (Weekday::Tue, 780, "B".to_string()),
            ]
        );
        assert!(defer.skipped.is_empty());
        assert!(defer.unplaced.is_empty());
    }

    #[test]
    fn every_day_ends_with_one_meeting() {
        let classes: Vec<_> = (0..30)
            .map(|i| class(&format!("C{i}"), &format!("P{}", i % 4), 45 + (i % 3) * 15))
            .collect();
        let schedule = WeekAssembler::default().assemble(&classes);

        for day in schedule.days() {
            let day_entries: Vec<_> = schedule.entries.iter().filter(|e| e.day() == day).collect();
            let meetings = day_entries
                .iter()
                .filter(|e| matches!(e, ScheduleEntry::Meeting { .. }))
                .count();
            assert_eq!(meetings, 1);
            assert!(matches!(
                day_entries.last(),
                Some(ScheduleEntry::Meeting { start: 1020, .. })
            ));
        }
    }
}
