//! Fixed calendar of the teaching week: weekdays, shifts and the daily meeting.

use std::fmt;

use chrono::{NaiveTime, Weekday};

/// Weekdays with classes, in emission order.
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Start of the mandatory faculty meeting that closes every day.
pub const MEETING_MINUTE: u32 = 17 * 60;

/// Display text of the faculty meeting.
pub const MEETING_TITLE: &str = "Reunião de professores (obrigatória)";

/// A daily teaching window `[start_hour:00, end_hour:00)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub name: &'static str,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Shift {
    pub const MORNING: Shift = Shift {
        name: "manhã",
        start_hour: 9,
        end_hour: 12,
    };

    pub const AFTERNOON: Shift = Shift {
        name: "tarde",
        start_hour: 13,
        end_hour: 17,
    };

    pub fn start_minute(&self) -> u32 {
        self.start_hour * 60
    }

    pub fn end_minute(&self) -> u32 {
        self.end_hour * 60
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:02}:00-{:02}:00)",
            self.name, self.start_hour, self.end_hour
        )
    }
}

/// Portuguese name of a weekday as printed in day headers.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Formats minutes since midnight as zero-padded `HH:MM`.
pub fn format_clock(minute_of_day: u32) -> String {
    match NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0) {
        Some(time) => time.format("%H:%M").to_string(),
        // 24:00 is a valid interval end but not a NaiveTime.
        None => format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60),
    }
}
