//! Shared business logic for the coverage API
//!
//! Thin layer over [`crate::coverage`]; handlers only shape these
//! results into JSON.

use crate::coverage;
use crate::models::{Place, ServiceDay};
use crate::schedule;

// ============================================================================
// Data Structures
// ============================================================================

/// One button on the day selector strip
#[derive(Debug, Clone)]
pub struct DayOption {
    pub label: String,
    pub color: &'static str,
    pub count: usize,
}

/// One column of the "day of week analysis" panel
#[derive(Debug, Clone)]
pub struct DayBreakdown {
    pub day: ServiceDay,
    pub color: &'static str,
    pub count: usize,
    pub locations: Vec<String>,
}

/// Viewport defaults for the frontend's map initialization
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub center: [f64; 2],
    pub zoom: f64,
    pub style: &'static str,
}

#[derive(Debug, Clone)]
pub struct CatalogStats {
    pub total_places: usize,
    pub scheduled_stops: usize,
    pub multi_day_places: usize,
    pub service_days: usize,
}

// ============================================================================
// Service
// ============================================================================

/// Query surface shared by every API frontend. The catalog is static,
/// so the service carries no state of its own.
#[derive(Debug, Default)]
pub struct CoverageService;

impl CoverageService {
    pub fn new() -> Self {
        Self
    }

    /// Selector strip: "All" first, then Monday through Friday
    pub fn day_options(&self) -> Vec<DayOption> {
        let mut options = vec![DayOption {
            label: "All".to_string(),
            color: schedule::MULTI_DAY_COLOR,
            count: coverage::count_for_day("All"),
        }];
        options.extend(ServiceDay::ALL.iter().map(|&day| DayOption {
            label: day.to_string(),
            color: schedule::color_for_day(day),
            count: coverage::count_for_day(day.name()),
        }));
        options
    }

    /// Marker feed for a selector token; empty for unknown tokens
    pub fn locations(&self, day: &str) -> Vec<Place> {
        coverage::places_for_day(day)
    }

    pub fn day_breakdowns(&self) -> Vec<DayBreakdown> {
        ServiceDay::ALL
            .iter()
            .map(|&day| {
                let names = schedule::schedule_for(day);
                DayBreakdown {
                    day,
                    color: schedule::color_for_day(day),
                    count: names.len(),
                    locations: names.iter().map(|s| s.to_string()).collect(),
                }
            })
            .collect()
    }

    pub fn map_config(&self) -> MapConfig {
        MapConfig {
            center: schedule::MAP_CENTER,
            zoom: schedule::MAP_ZOOM,
            style: schedule::MAP_STYLE,
        }
    }

    pub fn stats(&self) -> CatalogStats {
        let places = coverage::all_places();
        CatalogStats {
            total_places: places.len(),
            scheduled_stops: ServiceDay::ALL
                .iter()
                .map(|&day| schedule::schedule_for(day).len())
                .sum(),
            multi_day_places: places.iter().filter(|p| p.days.len() > 1).count(),
            service_days: ServiceDay::ALL.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_options_order_and_counts() {
        let options = CoverageService::new().day_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].label, "All");
        assert_eq!(options[0].count, 92);
        assert_eq!(options[1].label, "Monday");
        assert_eq!(options[1].count, 23);
        assert_eq!(options[5].label, "Friday");
        assert_eq!(options[5].count, 34);
    }

    #[test]
    fn test_stats() {
        let stats = CoverageService::new().stats();
        assert_eq!(stats.total_places, 92);
        assert_eq!(stats.scheduled_stops, 23 + 30 + 32 + 19 + 34);
        assert_eq!(stats.service_days, 5);
        // Every stop beyond the 92 distinct places is a repeat visit
        assert!(stats.multi_day_places > 0);
    }
}
