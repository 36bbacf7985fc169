//! Greedy placement of pending classes into a single shift.
//!
//! # Algorithm
//!
//! 1. Start a clock at the beginning of the shift.
//! 2. Take the class at the front of the queue and propose `[now, now + duration)`.
//! 3. If the proposal runs past the end of the shift, stop: the class stays at
//!    the front and the next shift reconsiders it.
//! 4. If the instructor is free, emit the class, record it and move the clock.
//!    Otherwise skip or defer it (per [`ConflictPolicy`]) without moving the clock.
//!
//! No backtracking is attempted.

use chrono::Weekday;
use tracing::debug;

use super::agenda::InstructorAgenda;
use super::entry::ScheduleEntry;
use super::interval::Interval;
use super::policy::ConflictPolicy;
use super::queue::PendingQueue;
use super::shift::{Shift, day_name, format_clock};

#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftPacker {
    on_conflict: ConflictPolicy,
}

impl ShiftPacker {
    pub fn new(on_conflict: ConflictPolicy) -> Self {
        Self { on_conflict }
    }

    /// Fills `shift` on `day` from the front of `queue`, returning the new cursor.
    pub fn pack(
        &self,
        queue: &mut PendingQueue<'_>,
        day: Weekday,
        shift: Shift,
        agenda: &mut InstructorAgenda,
        output: &mut Vec<ScheduleEntry>,
    ) -> usize {
        let shift_end = shift.end_minute();
        let mut now = shift.start_minute();

        while let Some(class) = queue.front() {
            let end = now.saturating_add(class.duration_minutes);
            if end > shift_end {
                debug!(
                    day = day_name(day),
                    %shift,
                    subject = %class.subject,
                    duration = class.duration_minutes,
                    "class does not fit the rest of the shift, carrying"
                );
                break;
            }

            // `now < end <= shift_end` always yields a valid interval.
            let Some(candidate) = Interval::new(now, end) else {
                break;
            };

            if agenda.has_conflict(&class.instructor, day, &candidate) {
                debug!(
                    day = day_name(day),
                    instructor = %class.instructor,
                    subject = %class.subject,
                    at = %format_clock(now),
                    policy = %self.on_conflict,
                    "instructor already busy"
                );
                match self.on_conflict {
                    ConflictPolicy::Skip => queue.skip(),
                    ConflictPolicy::Defer => queue.defer(),
                }
                continue;
            }

            output.push(ScheduleEntry::class(day, now, class));
            agenda.record(&class.instructor, day, candidate);
            debug!(
                day = day_name(day),
                at = %format_clock(now),
                subject = %class.subject,
                instructor = %class.instructor,
                "placed class"
            );
            now = end;
            queue.advance();
        }

        queue.cursor()
    }
}
