//! REST API handlers for the coverage dashboard
//!
//! These handlers use the shared CoverageService. The catalog queries
//! have no failure path, so every endpoint answers 200; an unknown day
//! token yields an empty marker list rather than an error.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::coverage;
use crate::models::Place;
use super::service::{CoverageService, DayBreakdown, DayOption};

// ============================================================================
// Response Types (JSON-serializable versions)
// ============================================================================

#[derive(Serialize)]
pub struct LocationResponse {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub days: Vec<String>,
    pub color: String,
}

impl From<Place> for LocationResponse {
    fn from(place: Place) -> Self {
        let color = coverage::color_for_place(&place).to_string();
        Self {
            name: place.name,
            longitude: place.coordinates[0],
            latitude: place.coordinates[1],
            days: place.days.iter().map(|d| d.to_string()).collect(),
            color,
        }
    }
}

#[derive(Serialize)]
pub struct DayOptionResponse {
    pub label: String,
    pub color: String,
    pub count: usize,
}

impl From<DayOption> for DayOptionResponse {
    fn from(o: DayOption) -> Self {
        Self {
            label: o.label,
            color: o.color.to_string(),
            count: o.count,
        }
    }
}

#[derive(Serialize)]
pub struct DayBreakdownResponse {
    pub day: String,
    pub color: String,
    pub count: usize,
    pub locations: Vec<String>,
}

impl From<DayBreakdown> for DayBreakdownResponse {
    fn from(b: DayBreakdown) -> Self {
        Self {
            day: b.day.to_string(),
            color: b.color.to_string(),
            count: b.count,
            locations: b.locations,
        }
    }
}

#[derive(Serialize)]
pub struct MapConfigResponse {
    pub center: [f64; 2],
    pub zoom: f64,
    pub style: String,
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct DayQuery {
    pub day: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

pub type AppState = Arc<CoverageService>;

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/days
pub async fn get_days(State(service): State<AppState>) -> Json<Vec<DayOptionResponse>> {
    let options = service
        .day_options()
        .into_iter()
        .map(DayOptionResponse::from)
        .collect();
    Json(options)
}

/// GET /api/v1/locations?day=Wednesday
pub async fn get_locations(
    State(service): State<AppState>,
    Query(params): Query<DayQuery>,
) -> Json<Vec<LocationResponse>> {
    let day = params.day.as_deref().unwrap_or("All");
    let locations = service
        .locations(day)
        .into_iter()
        .map(LocationResponse::from)
        .collect();
    Json(locations)
}

/// GET /api/v1/schedule
pub async fn get_schedule(State(service): State<AppState>) -> Json<Vec<DayBreakdownResponse>> {
    let breakdowns = service
        .day_breakdowns()
        .into_iter()
        .map(DayBreakdownResponse::from)
        .collect();
    Json(breakdowns)
}

/// GET /api/v1/map-config
pub async fn get_map_config(State(service): State<AppState>) -> Json<MapConfigResponse> {
    let config = service.map_config();
    Json(MapConfigResponse {
        center: config.center,
        zoom: config.zoom,
        style: config.style.to_string(),
    })
}
