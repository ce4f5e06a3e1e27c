//! Timetable records.
//!
//! One row of the timetable: origin code, destination code, start time
//! (`HHmm`), end time (`HHmm`), mode tag, price, origin display name,
//! destination display name.

use crate::domain::{Leg, LocationCode, Mode, TimeOfDay};

use super::error::RecordError;

/// Number of columns a timetable row must carry.
pub const RECORD_FIELDS: usize = 8;

/// A parsed timetable row: the leg plus the display names of its ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRecord {
    pub leg: Leg,
    pub origin_name: String,
    pub destination_name: String,
}

impl TimetableRecord {
    /// Parse a record from its raw fields.
    ///
    /// Extra trailing fields are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_server::schedule::TimetableRecord;
    ///
    /// let fields = ["DEL", "BOM", "0600", "0810", "flight", "4500", "Delhi", "Mumbai"];
    /// let record = TimetableRecord::from_fields(&fields).unwrap();
    /// assert_eq!(record.leg.duration_mins(), 130);
    /// assert_eq!(record.destination_name, "Mumbai");
    ///
    /// assert!(TimetableRecord::from_fields(&["DEL", "BOM"]).is_err());
    /// ```
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, RecordError> {
        if fields.len() < RECORD_FIELDS {
            return Err(RecordError::TooFewFields {
                expected: RECORD_FIELDS,
                found: fields.len(),
            });
        }
        let field = |i: usize| fields[i].as_ref().trim();

        let origin = parse_code(field(0), "origin code")?;
        let destination = parse_code(field(1), "destination code")?;
        let departs = parse_time(field(2), "start time")?;
        let arrives = parse_time(field(3), "end time")?;
        let mode = Mode::parse(field(4))?;
        let price = field(5)
            .parse::<u32>()
            .map_err(|_| RecordError::Price(field(5).to_string()))?;

        let leg = Leg::new(origin, destination, departs, arrives, mode, price)?;

        Ok(Self {
            leg,
            origin_name: field(6).to_string(),
            destination_name: field(7).to_string(),
        })
    }
}

fn parse_code(s: &str, field: &'static str) -> Result<LocationCode, RecordError> {
    LocationCode::parse(s).map_err(|source| RecordError::Code { field, source })
}

fn parse_time(s: &str, field: &'static str) -> Result<TimeOfDay, RecordError> {
    TimeOfDay::parse_hhmm(s).map_err(|source| RecordError::Time { field, source })
}
