use chrono::Weekday;
use serde::{Serialize, Serializer};

use super::class::ClassRecord;
use super::shift::{day_name, format_clock};

/// One line of the assembled week, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleEntry {
    Header {
        #[serde(serialize_with = "serialize_day")]
        day: Weekday,
    },
    Class {
        #[serde(serialize_with = "serialize_day")]
        day: Weekday,
        #[serde(serialize_with = "serialize_clock")]
        start: u32,
        subject: String,
        instructor: String,
        duration_minutes: u32,
    },
    Meeting {
        #[serde(serialize_with = "serialize_day")]
        day: Weekday,
        #[serde(serialize_with = "serialize_clock")]
        start: u32,
    },
}

impl ScheduleEntry {
    pub fn class(day: Weekday, start: u32, class: &ClassRecord) -> Self {
        ScheduleEntry::Class {
            day,
            start,
            subject: class.subject.clone(),
            instructor: class.instructor.clone(),
            duration_minutes: class.duration_minutes,
        }
    }

    pub fn day(&self) -> Weekday {
        match self {
            ScheduleEntry::Header { day }
            | ScheduleEntry::Class { day, .. }
            | ScheduleEntry::Meeting { day, .. } => *day,
        }
    }
}

/// Result of assembling a week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
    /// Classes dropped because their instructor was busy.
    pub skipped: Vec<ClassRecord>,
    /// Classes still waiting when the week ran out.
    pub unplaced: Vec<ClassRecord>,
}

impl Schedule {
    /// Number of placed classes.
    pub fn class_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, ScheduleEntry::Class { .. }))
            .count()
    }

    /// Days that received a header, in order.
    pub fn days(&self) -> Vec<Weekday> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                ScheduleEntry::Header { day } => Some(*day),
                _ => None,
            })
            .collect()
    }
}

fn serialize_day<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(day_name(*day))
}

fn serialize_clock<S: Serializer>(minute: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_clock(*minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_entry_serializes_with_names_and_clock() {
        let class = ClassRecord::new("Matemática", "Silva", 60).unwrap();
        let entry = ScheduleEntry::class(Weekday::Mon, 540, &class);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "class");
        assert_eq!(json["day"], "Segunda-feira");
        assert_eq!(json["start"], "09:00");
        assert_eq!(json["instructor"], "Silva");
        assert_eq!(json["duration_minutes"], 60);
    }

    #[test]
    fn counts_and_days() {
        let class = ClassRecord::new("A", "X", 60).unwrap();
        let schedule = Schedule {
            entries: vec![
                ScheduleEntry::Header { day: Weekday::Mon },
                ScheduleEntry::class(Weekday::Mon, 540, &class),
                ScheduleEntry::Meeting {
                    day: Weekday::Mon,
                    start: 1020,
                },
            ],
            ..Default::default()
        };
        assert_eq!(schedule.class_count(), 1);
        assert_eq!(schedule.days(), vec![Weekday::Mon]);
        assert_eq!(schedule.entries[1].day(), Weekday::Mon);
    }
}
