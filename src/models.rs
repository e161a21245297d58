use serde::{Deserialize, Serialize};
use std::fmt;

/// A real weekday the trucks run on. "All" is a query mode, not a day,
/// and never appears in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl ServiceDay {
    /// All service days in week order
    pub const ALL: [ServiceDay; 5] = [
        ServiceDay::Monday,
        ServiceDay::Tuesday,
        ServiceDay::Wednesday,
        ServiceDay::Thursday,
        ServiceDay::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ServiceDay::Monday => "Monday",
            ServiceDay::Tuesday => "Tuesday",
            ServiceDay::Wednesday => "Wednesday",
            ServiceDay::Thursday => "Thursday",
            ServiceDay::Friday => "Friday",
        }
    }
}

impl fmt::Display for ServiceDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Day selector state: a single day, or the combined "All days" view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelection {
    All,
    Day(ServiceDay),
}

impl DaySelection {
    /// Parse a selector token. Unknown tokens mean "no data", not an
    /// error, so this returns `None` rather than failing.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "All" => Some(DaySelection::All),
            "Monday" => Some(DaySelection::Day(ServiceDay::Monday)),
            "Tuesday" => Some(DaySelection::Day(ServiceDay::Tuesday)),
            "Wednesday" => Some(DaySelection::Day(ServiceDay::Wednesday)),
            "Thursday" => Some(DaySelection::Day(ServiceDay::Thursday)),
            "Friday" => Some(DaySelection::Day(ServiceDay::Friday)),
            _ => None,
        }
    }
}

/// A serviced place ready for the map layer. `days` is derived per
/// query, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// [longitude, latitude]
    pub coordinates: [f64; 2],
    pub days: Vec<ServiceDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(DaySelection::parse("All"), Some(DaySelection::All));
        assert_eq!(
            DaySelection::parse("Wednesday"),
            Some(DaySelection::Day(ServiceDay::Wednesday))
        );
        assert_eq!(DaySelection::parse("Saturday"), None);
        assert_eq!(DaySelection::parse("monday"), None);
        assert_eq!(DaySelection::parse(""), None);
    }

    #[test]
    fn test_day_names() {
        assert_eq!(ServiceDay::Monday.to_string(), "Monday");
        assert_eq!(ServiceDay::ALL.len(), 5);
    }
}
