use serde::{Deserialize, Serialize};

/// One class read from the input file: what is taught, by whom, for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub subject: String,
    pub instructor: String,
    pub duration_minutes: u32,
}

impl ClassRecord {
    /// Returns `None` for a zero duration.
    pub fn new(
        subject: impl Into<String>,
        instructor: impl Into<String>,
        duration_minutes: u32,
    ) -> Option<Self> {
        if duration_minutes == 0 {
            return None;
        }
        Some(Self {
            subject: subject.into(),
            instructor: instructor.into(),
            duration_minutes,
        })
    }
}
