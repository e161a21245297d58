//! API module for the coverage dashboard
//!
//! REST interface over the catalog queries, consumed by the map frontend.

pub mod handlers;
pub mod service;

pub use service::CoverageService;
