//! Schedule graph and timetable ingestion.
//!
//! The timetable is a flat file of legs. It is read once into an
//! immutable [`ScheduleGraph`] that every query then shares.

mod error;
mod graph;
mod loader;
mod record;
mod shared;

pub use error::{LoadError, RecordError};
pub use graph::ScheduleGraph;
pub use loader::{LoadSummary, load_schedule, read_schedule};
pub use record::{RECORD_FIELDS, TimetableRecord};
pub use shared::SharedSchedule;
