mod agenda;
mod assembler;
mod class;
mod entry;
mod interval;
mod packer;
mod policy;
mod queue;
mod shift;

pub use agenda::InstructorAgenda;
pub use assembler::WeekAssembler;
pub use class::ClassRecord;
pub use entry::{Schedule, ScheduleEntry};
pub use interval::{Interval, MINUTES_PER_DAY};
pub use packer::ShiftPacker;
pub use policy::{AgendaScope, ConflictPolicy, PlacementPolicy};
pub use queue::PendingQueue;
pub use shift::{MEETING_MINUTE, MEETING_TITLE, Shift, WEEKDAYS, day_name, format_clock};
