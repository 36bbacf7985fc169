use std::io::Write;

use crate::error::CronogramaError;
use crate::schedule::{MEETING_TITLE, Schedule, ScheduleEntry, day_name, format_clock};

/// Output format selected on the command line or in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Turns an assembled schedule into output.
pub trait Renderer {
    fn render(&self, schedule: &Schedule, out: &mut dyn Write) -> Result<(), CronogramaError>;
}

/// One human-readable line per entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn line(entry: &ScheduleEntry) -> String {
        match entry {
            ScheduleEntry::Header { day } => format!("📅 {}", day_name(*day)),
            ScheduleEntry::Class {
                start,
                subject,
                instructor,
                duration_minutes,
                ..
            } => format!(
                "{} {subject} - Prof. {instructor} {duration_minutes} min",
                format_clock(*start)
            ),
            ScheduleEntry::Meeting { start, .. } => {
                format!("{} {MEETING_TITLE}", format_clock(*start))
            }
        }
    }

    pub fn lines(schedule: &Schedule) -> Vec<String> {
        schedule.entries.iter().map(Self::line).collect()
    }
}

impl Renderer for TextRenderer {
    fn render(&self, schedule: &Schedule, out: &mut dyn Write) -> Result<(), CronogramaError> {
        for line in Self::lines(schedule) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// The whole schedule, including skipped and unplaced classes, as pretty JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, schedule: &Schedule, out: &mut dyn Write) -> Result<(), CronogramaError> {
        serde_json::to_writer_pretty(&mut *out, schedule)?;
        writeln!(out)?;
        Ok(())
    }
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::schedule::ClassRecord;

    fn sample() -> Schedule {
        let class = ClassRecord::new("Matemática", "Silva", 60).unwrap();
        Schedule {
            entries: vec![
                ScheduleEntry::Header { day: Weekday::Mon },
                ScheduleEntry::class(Weekday::Mon, 540, &class),
                ScheduleEntry::Meeting {
                    day: Weekday::Mon,
                    start: 1020,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn text_lines() {
        assert_eq!(
            TextRenderer::lines(&sample()),
            vec![
                "📅 Segunda-feira",
                "09:00 Matemática - Prof. Silva 60 min",
                "17:00 Reunião de professores (obrigatória)",
            ]
        );
    }

    #[test]
    fn text_render_writes_one_line_per_entry() {
        let mut buf = Vec::new();
        TextRenderer.render(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn json_render_is_valid_json() {
        let mut buf = Vec::new();
        OutputFormat::Json
            .renderer()
            .render(&sample(), &mut buf)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["entries"][0]["kind"], "header");
        assert_eq!(value["entries"][1]["start"], "09:00");
        assert_eq!(value["entries"][2]["kind"], "meeting");
        assert_eq!(value["skipped"].as_array().unwrap().len(), 0);
    }
}
