//! Scheduled leg type.
//!
//! A `Leg` is one timetabled segment between two locations. Legs are
//! immutable once parsed and shared between the graph and the routes
//! built from it via `Arc`.

use chrono::Duration;

use super::{DomainError, LocationCode, Mode, TimeOfDay};

/// One scheduled segment: origin to destination with a fixed mode,
/// time window and price.
///
/// # Invariants
///
/// - `origin != destination`
/// - Duration is derived from the time window, never stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    origin: LocationCode,
    destination: LocationCode,
    departs: TimeOfDay,
    arrives: TimeOfDay,
    mode: Mode,
    price: u32,
}

impl Leg {
    /// Construct a leg.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the origin and destination are the same location.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_server::domain::{Leg, LocationCode, Mode, TimeOfDay};
    ///
    /// let leg = Leg::new(
    ///     LocationCode::parse("DEL").unwrap(),
    ///     LocationCode::parse("BOM").unwrap(),
    ///     TimeOfDay::parse_hhmm("2330").unwrap(),
    ///     TimeOfDay::parse_hhmm("0130").unwrap(),
    ///     Mode::parse("flight").unwrap(),
    ///     4500,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(leg.duration_mins(), 120);
    /// ```
    pub fn new(
        origin: LocationCode,
        destination: LocationCode,
        departs: TimeOfDay,
        arrives: TimeOfDay,
        mode: Mode,
        price: u32,
    ) -> Result<Self, DomainError> {
        if origin == destination {
            return Err(DomainError::InvalidLeg(
                "origin and destination must differ",
            ));
        }

        Ok(Self {
            origin,
            destination,
            departs,
            arrives,
            mode,
            price,
        })
    }

    /// Returns the origin location.
    pub fn origin(&self) -> LocationCode {
        self.origin
    }

    /// Returns the destination location.
    pub fn destination(&self) -> LocationCode {
        self.destination
    }

    /// Returns the scheduled departure time of day.
    pub fn departs(&self) -> TimeOfDay {
        self.departs
    }

    /// Returns the scheduled arrival time of day.
    pub fn arrives(&self) -> TimeOfDay {
        self.arrives
    }

    /// Returns the transport mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Returns the price in whole currency units.
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Travel time in minutes, wrapping past midnight when the leg
    /// arrives earlier in the day than it departs.
    pub fn duration_mins(&self) -> u32 {
        self.departs.minutes_until(self.arrives)
    }

    /// Travel time as a `chrono::Duration`.
    pub fn duration(&self) -> Duration {
        self.departs.duration_until(self.arrives)
    }

    /// Whether switching from `self` onto `next` changes transport mode.
    pub fn changes_mode_to(&self, next: &Leg) -> bool {
        self.mode != next.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> LocationCode {
        LocationCode::parse(s).unwrap()
    }

    fn leg(from: &str, to: &str, dep: &str, arr: &str, mode: &str, price: u32) -> Leg {
        Leg::new(
            code(from),
            code(to),
            TimeOfDay::parse_hhmm(dep).unwrap(),
            TimeOfDay::parse_hhmm(arr).unwrap(),
            Mode::parse(mode).unwrap(),
            price,
        )
        .unwrap()
    }

    #[test]
    fn daytime_duration() {
        assert_eq!(leg("AAA", "BBB", "0800", "1000", "flight", 100).duration_mins(), 120);
    }

    #[test]
    fn overnight_duration() {
        let overnight = leg("AAA", "BBB", "2330", "0130", "train", 10);
        assert_eq!(overnight.duration_mins(), 120);
        assert_eq!(overnight.duration(), Duration::minutes(120));
    }

    #[test]
    fn rejects_self_loop() {
        let result = Leg::new(
            code("AAA"),
            code("AAA"),
            TimeOfDay::parse_hhmm("0800").unwrap(),
            TimeOfDay::parse_hhmm("0900").unwrap(),
            Mode::parse("bus").unwrap(),
            5,
        );
        assert!(matches!(result, Err(DomainError::InvalidLeg(_))));
    }

    #[test]
    fn mode_change_detection() {
        let a = leg("AAA", "BBB", "0800", "0900", "train", 10);
        let b = leg("BBB", "CCC", "1000", "1100", "train", 10);
        let c = leg("BBB", "CCC", "1000", "1100", "bus", 10);
        assert!(!a.changes_mode_to(&b));
        assert!(a.changes_mode_to(&c));
    }
}
