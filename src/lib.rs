//! Delivery coverage catalog for the Cape Town truck routes
//!
//! Holds the static day-schedule and coordinate dataset, the day-filter
//! queries the dashboard map runs on, and a REST API for the frontend.

pub mod api;
pub mod coverage;
pub mod models;
pub mod schedule;
