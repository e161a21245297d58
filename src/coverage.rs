//! Catalog queries behind the day selector
//!
//! Pure functions over the static dataset in [`crate::schedule`]. The
//! map layer calls these on every selector change; nothing is cached
//! and nothing is mutated, so they are safe to call from anywhere.

use std::collections::HashSet;

use crate::models::{DaySelection, Place, ServiceDay};
use crate::schedule;

/// Every place in the coordinate table, in catalog order, with its
/// full set of service days (recomputed from the schedules).
pub fn all_places() -> Vec<Place> {
    schedule::COORDINATES
        .iter()
        .map(|&(name, coordinates)| Place {
            name: name.to_string(),
            coordinates,
            days: ServiceDay::ALL
                .iter()
                .copied()
                .filter(|&day| schedule::schedule_for(day).contains(&name))
                .collect(),
        })
        .collect()
}

/// Places to plot for a selector token.
///
/// A single-day query keeps the schedule's ordering, silently drops
/// names with no coordinates, and reports `days` as just the queried
/// day. The "All" view reports each place's true multi-day set
/// instead; the two views intentionally disagree on `days` for places
/// serviced more than once a week.
pub fn places_for_day(day: &str) -> Vec<Place> {
    match DaySelection::parse(day) {
        Some(DaySelection::All) => all_places(),
        Some(DaySelection::Day(day)) => schedule::schedule_for(day)
            .iter()
            .filter_map(|&name| {
                let coordinates = schedule::coordinates_for(name)?;
                Some(Place {
                    name: name.to_string(),
                    coordinates,
                    days: vec![day],
                })
            })
            .collect(),
        None => Vec::new(),
    }
}

/// Location count shown on a selector button.
///
/// Counts raw schedule entries, not plottable markers: a scheduled name
/// with no coordinates is counted here but dropped by
/// [`places_for_day`], so the button count can exceed the markers on
/// the map when the source data is incomplete.
pub fn count_for_day(day: &str) -> usize {
    match DaySelection::parse(day) {
        Some(DaySelection::All) => {
            let mut seen: HashSet<&str> = HashSet::new();
            for day in ServiceDay::ALL {
                seen.extend(schedule::schedule_for(day));
            }
            seen.len()
        }
        Some(DaySelection::Day(day)) => schedule::schedule_for(day).len(),
        None => 0,
    }
}

/// Marker color for a place: its day's color, or the combined color
/// when it is serviced on more than one day.
pub fn color_for_place(place: &Place) -> &'static str {
    match place.days.as_slice() {
        [day] => schedule::color_for_day(*day),
        _ => schedule::MULTI_DAY_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_day_keeps_schedule_order() {
        for day in ServiceDay::ALL {
            let places = places_for_day(day.name());
            let expected: Vec<&str> = schedule::schedule_for(day)
                .iter()
                .copied()
                .filter(|name| schedule::coordinates_for(name).is_some())
                .collect();
            let got: Vec<&str> = places.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_single_day_narrows_day_set() {
        // Cape Town CBD runs Wednesday and Friday, but a Wednesday
        // query only reports Wednesday.
        let wednesday = places_for_day("Wednesday");
        let cbd = wednesday
            .iter()
            .find(|p| p.name == "Cape Town CBD")
            .expect("Cape Town CBD serviced on Wednesday");
        assert_eq!(cbd.days, vec![ServiceDay::Wednesday]);

        for place in &wednesday {
            assert_eq!(place.days, vec![ServiceDay::Wednesday]);
            assert!(schedule::coordinates_for(&place.name).is_some());
        }
    }

    #[test]
    fn test_all_view_reports_true_day_sets() {
        let places = places_for_day("All");

        // One entry per coordinate-table name, same order
        assert_eq!(places.len(), schedule::COORDINATES.len());
        for (place, &(name, coordinates)) in places.iter().zip(schedule::COORDINATES) {
            assert_eq!(place.name, name);
            assert_eq!(place.coordinates, coordinates);
        }

        let cbd = places.iter().find(|p| p.name == "Cape Town CBD").unwrap();
        assert_eq!(cbd.days, vec![ServiceDay::Wednesday, ServiceDay::Friday]);

        let bellville = places.iter().find(|p| p.name == "Bellville").unwrap();
        assert_eq!(bellville.days, vec![ServiceDay::Monday]);
    }

    #[test]
    fn test_all_count_is_deduplicated_union() {
        let mut union: HashSet<&str> = HashSet::new();
        for day in ServiceDay::ALL {
            union.extend(schedule::schedule_for(day));
        }
        assert_eq!(count_for_day("All"), union.len());
        assert_eq!(count_for_day("All"), 92);
    }

    #[test]
    fn test_day_count_is_raw_schedule_length() {
        assert_eq!(count_for_day("Tuesday"), 30);
        // Equal to the rendered count only because every Tuesday name
        // has coordinates; the count itself never filters.
        assert!(schedule::schedule_for(ServiceDay::Tuesday)
            .iter()
            .all(|name| schedule::coordinates_for(name).is_some()));
        assert_eq!(places_for_day("Tuesday").len(), 30);
    }

    #[test]
    fn test_unrecognized_day_is_empty() {
        for token in ["Saturday", "Sunday", "all", "WEDNESDAY", "", "Someday"] {
            assert!(places_for_day(token).is_empty(), "token {:?}", token);
            assert_eq!(count_for_day(token), 0, "token {:?}", token);
        }
    }

    #[test]
    fn test_color_rule() {
        let single = Place {
            name: "Bellville".into(),
            coordinates: [18.6321, -33.8896],
            days: vec![ServiceDay::Monday],
        };
        assert_eq!(color_for_place(&single), schedule::color_for_day(ServiceDay::Monday));

        let multi = Place {
            name: "Cape Town CBD".into(),
            coordinates: [18.4241, -33.9249],
            days: vec![ServiceDay::Wednesday, ServiceDay::Friday],
        };
        assert_eq!(color_for_place(&multi), schedule::MULTI_DAY_COLOR);

        // A mapped place in no schedule has no day to take a color from
        let orphan = Place {
            name: "Orphan".into(),
            coordinates: [0.0, 0.0],
            days: Vec::new(),
        };
        assert_eq!(color_for_place(&orphan), schedule::MULTI_DAY_COLOR);
    }

    #[test]
    fn test_queries_are_idempotent() {
        assert_eq!(places_for_day("All"), places_for_day("All"));
        assert_eq!(places_for_day("Friday"), places_for_day("Friday"));
        assert_eq!(count_for_day("Monday"), count_for_day("Monday"));
    }
}
