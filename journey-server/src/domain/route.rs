//! Route types.
//!
//! A `Route` is an ordered, contiguous sequence of legs forming one
//! itinerary, with running totals for time (including transfer
//! penalties) and price.

use std::sync::Arc;

use super::{DomainError, Leg, LocationCode};

/// A leg within a route, with the transfer penalty paid to board it.
#[derive(Debug, Clone)]
struct Step {
    leg: Arc<Leg>,
    transfer_mins: u32,
}

/// An itinerary: legs where each leg starts where the previous one ended.
///
/// During search a single `Route` is grown and shrunk in place with
/// [`push`](Route::push) and [`pop`](Route::pop); completed routes are
/// captured with `clone()`, which copies the leg list (the legs themselves
/// are shared).
#[derive(Debug, Clone, Default)]
pub struct Route {
    steps: Vec<Step>,
    total_time: u64,
    total_price: u64,
}

impl Route {
    /// Create an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a route from a sequence of legs.
    ///
    /// `transfer_penalty_mins` is added to the total time wherever
    /// consecutive legs use different modes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty or consecutive legs don't connect.
    pub fn from_legs(
        legs: impl IntoIterator<Item = Arc<Leg>>,
        transfer_penalty_mins: u32,
    ) -> Result<Self, DomainError> {
        let mut route = Self::new();
        for leg in legs {
            if let Some(last) = route.last_leg() {
                if last.destination() != leg.origin() {
                    return Err(DomainError::NotContiguous(
                        last.destination(),
                        leg.origin(),
                    ));
                }
            }
            let transfer = route.transfer_before(&leg, transfer_penalty_mins);
            route.push(leg, transfer);
        }

        if route.is_empty() {
            return Err(DomainError::EmptyRoute);
        }
        Ok(route)
    }

    /// Penalty for boarding `next` after the current last leg.
    ///
    /// Zero for the first leg or when the mode is unchanged.
    pub fn transfer_before(&self, next: &Leg, penalty_mins: u32) -> u32 {
        match self.last_leg() {
            Some(last) if last.changes_mode_to(next) => penalty_mins,
            _ => 0,
        }
    }

    /// Append a leg, paying `transfer_mins` on top of its duration.
    ///
    /// The caller guarantees the leg starts where the route currently ends.
    pub fn push(&mut self, leg: Arc<Leg>, transfer_mins: u32) {
        debug_assert!(
            self.last_leg()
                .is_none_or(|last| last.destination() == leg.origin()),
            "route legs must be contiguous"
        );
        self.total_time += u64::from(leg.duration_mins()) + u64::from(transfer_mins);
        self.total_price += u64::from(leg.price());
        self.steps.push(Step { leg, transfer_mins });
    }

    /// Remove the last leg, undoing its contribution to the totals.
    pub fn pop(&mut self) -> Option<Arc<Leg>> {
        let step = self.steps.pop()?;
        self.total_time -= u64::from(step.leg.duration_mins()) + u64::from(step.transfer_mins);
        self.total_price -= u64::from(step.leg.price());
        Some(step.leg)
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> impl ExactSizeIterator<Item = &Arc<Leg>> {
        self.steps.iter().map(|s| &s.leg)
    }

    /// Returns the last leg, if any.
    pub fn last_leg(&self) -> Option<&Arc<Leg>> {
        self.steps.last().map(|s| &s.leg)
    }

    /// Number of legs.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the route has no legs.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total minutes: leg durations plus transfer penalties.
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Total price of all legs.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Number of mode changes paid for along the route.
    pub fn transfer_count(&self) -> usize {
        self.steps.iter().filter(|s| s.transfer_mins > 0).count()
    }

    /// Origin of the first leg.
    pub fn origin(&self) -> Option<LocationCode> {
        self.steps.first().map(|s| s.leg.origin())
    }

    /// Destination of the last leg.
    pub fn destination(&self) -> Option<LocationCode> {
        self.last_leg().map(|leg| leg.destination())
    }

    /// The stop-code path: the first leg's origin followed by every leg's
    /// destination. Two routes with the same stop path are the same route
    /// for ranking, whichever legs realise it.
    pub fn stop_path(&self) -> Vec<LocationCode> {
        self.origin()
            .into_iter()
            .chain(self.legs().map(|leg| leg.destination()))
            .collect()
    }

    /// The stop-code path joined with `_` (e.g. `DEL_JAI_BOM`).
    pub fn route_key(&self) -> String {
        self.stop_path()
            .iter()
            .map(LocationCode::as_str)
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Per-leg transport descriptions, `MODE_PRICE`, in leg order.
    pub fn transport(&self) -> Vec<String> {
        self.legs()
            .map(|leg| format!("{}_{}", leg.mode(), leg.price()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mode, TimeOfDay};

    fn code(s: &str) -> LocationCode {
        LocationCode::parse(s).unwrap()
    }

    fn leg(from: &str, to: &str, dep: &str, arr: &str, mode: &str, price: u32) -> Arc<Leg> {
        Arc::new(
            Leg::new(
                code(from),
                code(to),
                TimeOfDay::parse_hhmm(dep).unwrap(),
                TimeOfDay::parse_hhmm(arr).unwrap(),
                Mode::parse(mode).unwrap(),
                price,
            )
            .unwrap(),
        )
    }

    #[test]
    fn single_leg_totals() {
        let route = Route::from_legs([leg("AAA", "BBB", "0800", "1000", "flight", 100)], 120).unwrap();
        assert_eq!(route.total_time(), 120);
        assert_eq!(route.total_price(), 100);
        assert_eq!(route.transfer_count(), 0);
    }

    #[test]
    fn mode_change_adds_one_penalty() {
        let route = Route::from_legs(
            [
                leg("AAA", "DDD", "0900", "1200", "train", 20),
                leg("DDD", "CCC", "1300", "1400", "bus", 15),
            ],
            120,
        )
        .unwrap();

        // 180 + 60 travelling, plus one transfer
        assert_eq!(route.total_time(), 360);
        assert_eq!(route.total_price(), 35);
        assert_eq!(route.transfer_count(), 1);
    }

    #[test]
    fn same_mode_has_no_penalty() {
        let route = Route::from_legs(
            [
                leg("AAA", "BBB", "0900", "1000", "train", 20),
                leg("BBB", "CCC", "1100", "1130", "train", 15),
            ],
            120,
        )
        .unwrap();
        assert_eq!(route.total_time(), 90);
    }

    #[test]
    fn rejects_disconnected_legs() {
        let result = Route::from_legs(
            [
                leg("AAA", "BBB", "0900", "1000", "train", 20),
                leg("CCC", "DDD", "1100", "1130", "train", 15),
            ],
            120,
        );
        assert!(matches!(result, Err(DomainError::NotContiguous(_, _))));
    }

    #[test]
    fn rejects_empty() {
        let result = Route::from_legs(Vec::<Arc<Leg>>::new(), 120);
        assert!(matches!(result, Err(DomainError::EmptyRoute)));
    }

    #[test]
    fn push_pop_restores_totals() {
        let mut route = Route::new();
        let first = leg("AAA", "BBB", "0900", "1000", "train", 20);
        let second = leg("BBB", "CCC", "2300", "0100", "bus", 15);

        route.push(first.clone(), 0);
        let transfer = route.transfer_before(&second, 120);
        assert_eq!(transfer, 120);
        route.push(second, transfer);
        assert_eq!(route.total_time(), 60 + 120 + 120);

        route.pop();
        assert_eq!(route.total_time(), 60);
        assert_eq!(route.total_price(), 20);
        assert_eq!(route.last_leg(), Some(&first));

        route.pop();
        assert!(route.is_empty());
        assert_eq!(route.total_time(), 0);
        assert!(route.pop().is_none());
    }

    #[test]
    fn stop_path_and_transport() {
        let route = Route::from_legs(
            [
                leg("DEL", "JAI", "0600", "0700", "flight", 3000),
                leg("JAI", "BOM", "0900", "1100", "flight", 4000),
            ],
            120,
        )
        .unwrap();

        assert_eq!(route.stop_path(), vec![code("DEL"), code("JAI"), code("BOM")]);
        assert_eq!(route.route_key(), "DEL_JAI_BOM");
        assert_eq!(route.transport(), vec!["flight_3000", "flight_4000"]);
        assert_eq!(route.origin(), Some(code("DEL")));
        assert_eq!(route.destination(), Some(code("BOM")));
    }

    #[test]
    fn empty_route_has_empty_path() {
        let route = Route::new();
        assert!(route.stop_path().is_empty());
        assert_eq!(route.route_key(), "");
    }
}
