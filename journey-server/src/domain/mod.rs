//! Domain types for the journey planner.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod code;
mod error;
mod leg;
mod mode;
mod route;
mod time;

pub use code::{InvalidLocationCode, LocationCode, MAX_CODE_LEN};
pub use error::DomainError;
pub use leg::Leg;
pub use mode::{InvalidMode, Mode};
pub use route::Route;
pub use time::{MINUTES_PER_DAY, TimeError, TimeOfDay};
