//! The schedule graph.
//!
//! An adjacency map from each location to its outbound legs, plus the
//! set of every location that appears as some leg's destination. Built
//! once, then only read.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::{Leg, LocationCode};

use super::record::TimetableRecord;

/// Immutable adjacency structure over timetable legs.
#[derive(Debug, Clone, Default)]
pub struct ScheduleGraph {
    outbound: HashMap<LocationCode, Vec<Arc<Leg>>>,
    destinations: HashSet<LocationCode>,
    names: HashMap<LocationCode, String>,
    leg_count: usize,
}

impl ScheduleGraph {
    /// Build a graph from bare legs.
    pub fn from_legs(legs: impl IntoIterator<Item = Leg>) -> Self {
        let mut builder = ScheduleGraphBuilder::default();
        for leg in legs {
            builder.add_leg(leg);
        }
        builder.build()
    }

    /// Build a graph from parsed timetable records, keeping display names.
    pub fn from_records(records: impl IntoIterator<Item = TimetableRecord>) -> Self {
        let mut builder = ScheduleGraphBuilder::default();
        for record in records {
            builder.add_record(record);
        }
        builder.build()
    }

    /// Outbound legs from `code`, in timetable order. Empty if none.
    pub fn outbound_legs(&self, code: &LocationCode) -> &[Arc<Leg>] {
        self.outbound.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `code` has at least one outbound leg.
    pub fn has_origin(&self, code: &LocationCode) -> bool {
        self.outbound.contains_key(code)
    }

    /// Whether any leg arrives at `code`.
    pub fn is_known_destination(&self, code: &LocationCode) -> bool {
        self.destinations.contains(code)
    }

    /// Display name recorded for `code`, if the timetable gave one.
    pub fn display_name(&self, code: &LocationCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Number of locations with outbound legs.
    pub fn origin_count(&self) -> usize {
        self.outbound.len()
    }

    /// Total number of legs.
    pub fn leg_count(&self) -> usize {
        self.leg_count
    }

    /// Iterate over origins and their outbound leg counts.
    pub fn origins(&self) -> impl Iterator<Item = (LocationCode, usize)> + '_ {
        self.outbound.iter().map(|(code, legs)| (*code, legs.len()))
    }

    /// Whether the graph holds no legs at all.
    pub fn is_empty(&self) -> bool {
        self.leg_count == 0
    }
}

/// Accumulates legs before freezing them into a [`ScheduleGraph`].
#[derive(Debug, Default)]
pub(crate) struct ScheduleGraphBuilder {
    graph: ScheduleGraph,
}

impl ScheduleGraphBuilder {
    pub(crate) fn add_record(&mut self, record: TimetableRecord) {
        let TimetableRecord {
            leg,
            origin_name,
            destination_name,
        } = record;
        self.remember_name(leg.origin(), origin_name);
        self.remember_name(leg.destination(), destination_name);
        self.add_leg(leg);
    }

    pub(crate) fn add_leg(&mut self, leg: Leg) {
        let graph = &mut self.graph;
        graph.destinations.insert(leg.destination());
        graph
            .outbound
            .entry(leg.origin())
            .or_default()
            .push(Arc::new(leg));
        graph.leg_count += 1;
    }

    pub(crate) fn build(self) -> ScheduleGraph {
        self.graph
    }

    /// First non-empty name wins.
    fn remember_name(&mut self, code: LocationCode, name: String) {
        if !name.is_empty() {
            self.graph.names.entry(code).or_insert(name);
        }
    }
}
