//! Multi-leg journey planner server.
//!
//! Loads a timetable of point-to-point legs and answers "what are the
//! fastest (or cheapest) ways from here to there?" with up to five ranked
//! routes, each a chain of legs that may change mode along the way.

pub mod config;
pub mod domain;
pub mod locations;
pub mod planner;
pub mod schedule;
pub mod service;
pub mod web;
