//! Greedy weekly class scheduler.
//!
//! Reads classes (`subject - Prof. Name minutes`) from a text file and lays
//! them out Monday to Friday in a morning shift (09:00-12:00) and an
//! afternoon shift (13:00-17:00), closing every day with the 17:00 faculty
//! meeting. An instructor never holds two overlapping intervals.
//!
//! # Modules
//!
//! - **`schedule`**: the assembly engine: `Interval`, `InstructorAgenda`,
//!   `ShiftPacker`, `WeekAssembler`
//! - **`loader`**: line parser for the input file
//! - **`render`**: text and JSON output
//! - **`app`**: one run of the binary against a configuration
//! - **`config`**, **`cli`**, **`ui`**, **`error`**: the binary's plumbing

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod schedule;
pub mod ui;

/// Printed instead of a schedule when the input has no valid class.
pub const EMPTY_INPUT_MESSAGE: &str = "Nenhuma aula válida encontrada.";
