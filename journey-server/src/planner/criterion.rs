//! Ranking criteria.

use std::fmt;
use std::str::FromStr;

use crate::domain::{Leg, Route};

/// Error returned when parsing an unknown criterion name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion {0:?}: expected \"time\" or \"price\"")]
pub struct UnknownCriterion(String);

/// The dimension a query is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Total travel time, including transfer penalties.
    Time,
    /// Total price.
    Price,
}

impl Criterion {
    /// Local cost of a single leg, used to order candidates at a node.
    pub fn leg_cost(&self, leg: &Leg) -> u64 {
        match self {
            Criterion::Time => u64::from(leg.duration_mins()),
            Criterion::Price => u64::from(leg.price()),
        }
    }

    /// The route's aggregate under this criterion.
    pub fn route_metric(&self, route: &Route) -> u64 {
        match self {
            Criterion::Time => route.total_time(),
            Criterion::Price => route.total_price(),
        }
    }

    /// What the route's metric would become after taking `leg` with
    /// `transfer_mins` of penalty. Transfers only count towards time.
    pub fn projected(&self, route: &Route, leg: &Leg, transfer_mins: u32) -> u64 {
        match self {
            Criterion::Time => {
                route.total_time() + u64::from(leg.duration_mins()) + u64::from(transfer_mins)
            }
            Criterion::Price => route.total_price() + u64::from(leg.price()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Time => "time",
            Criterion::Price => "price",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" | "fastest" => Ok(Criterion::Time),
            "price" | "cheapest" => Ok(Criterion::Price),
            _ => Err(UnknownCriterion(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationCode, Mode, TimeOfDay};
    use std::sync::Arc;

    fn leg(from: &str, to: &str, dep: &str, arr: &str, mode: &str, price: u32) -> Arc<Leg> {
        Arc::new(
            Leg::new(
                LocationCode::parse(from).unwrap(),
                LocationCode::parse(to).unwrap(),
                TimeOfDay::parse_hhmm(dep).unwrap(),
                TimeOfDay::parse_hhmm(arr).unwrap(),
                Mode::parse(mode).unwrap(),
                price,
            )
            .unwrap(),
        )
    }

    #[test]
    fn leg_cost_by_criterion() {
        let l = leg("AAA", "BBB", "0900", "1200", "train", 20);
        assert_eq!(Criterion::Time.leg_cost(&l), 180);
        assert_eq!(Criterion::Price.leg_cost(&l), 20);
    }

    #[test]
    fn projection_includes_transfer_for_time_only() {
        let mut route = Route::new();
        route.push(leg("AAA", "DDD", "0900", "1200", "train", 20), 0);
        let next = leg("DDD", "CCC", "1300", "1400", "bus", 15);

        assert_eq!(Criterion::Time.projected(&route, &next, 120), 180 + 60 + 120);
        assert_eq!(Criterion::Price.projected(&route, &next, 120), 35);
    }

    #[test]
    fn parse_names() {
        assert_eq!("time".parse::<Criterion>().unwrap(), Criterion::Time);
        assert_eq!("Fastest".parse::<Criterion>().unwrap(), Criterion::Time);
        assert_eq!("PRICE".parse::<Criterion>().unwrap(), Criterion::Price);
        assert_eq!("cheapest".parse::<Criterion>().unwrap(), Criterion::Price);
        assert!("distance".parse::<Criterion>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for c in [Criterion::Time, Criterion::Price] {
            assert_eq!(c.to_string().parse::<Criterion>().unwrap(), c);
        }
    }
}
