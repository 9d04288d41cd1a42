//! Reduction of one road's five resource lists into a display-ready summary.
//!
//! Every field except warnings looks only at the first entry of its list.
//! Absent fields inside that entry fall back to fixed sentinel text; an empty
//! list leaves the field as `None`.

use chrono::Datelike;
use serde::Serialize;

use crate::types::{Coordinate, ResourceEntry, RoadId};

const NO_ROADWORK: &str = "No Roadwork";
const NO_DIRECTION: &str = "No Direction";
const NO_WARNING: &str = "No Warning";
const NO_CLOSURE: &str = "No Closure";
const NO_STATION: &str = "No Station";
const INVALID_LAT: &str = "Invalid Lat";
const INVALID_LONG: &str = "Invalid Long";
const INVALID_DATE: &str = "Invalid Date";

/// The five resource lists fetched for a single road.
#[derive(Debug, Clone, Default)]
pub struct RoadResources {
    pub roadworks: Vec<ResourceEntry>,
    pub parking_lorry: Vec<ResourceEntry>,
    pub warnings: Vec<ResourceEntry>,
    pub closures: Vec<ResourceEntry>,
    pub charging_stations: Vec<ResourceEntry>,
}

/// Display-ready status of one road.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadSummary {
    pub name: RoadId,
    pub roadworks: Option<String>,
    pub direction: Option<String>,
    pub parking_lorry: Option<String>,
    /// Every warning title, in API order.
    pub warnings: Vec<String>,
    pub closure: Option<String>,
    pub charging_station: Option<String>,
}

/// Reduces the resource lists of `name` into a [`RoadSummary`].
#[must_use]
pub fn summarize_road(name: &str, resources: &RoadResources) -> RoadSummary {
    let first_roadwork = resources.roadworks.first();

    RoadSummary {
        name: name.to_owned(),
        roadworks: first_roadwork.map(roadwork_description),
        direction: first_roadwork.map(roadwork_direction),
        parking_lorry: resources.parking_lorry.first().map(parking_lorry_description),
        warnings: resources.warnings.iter().map(warning_title).collect(),
        closure: resources.closures.first().map(closure_description),
        charging_station: resources
            .charging_stations
            .first()
            .map(charging_station_description),
    }
}

fn roadwork_description(entry: &ResourceEntry) -> String {
    description_text(entry).unwrap_or_else(|| NO_ROADWORK.to_owned())
}

fn roadwork_direction(entry: &ResourceEntry) -> String {
    non_empty(entry.subtitle.as_deref()).map_or_else(|| NO_DIRECTION.to_owned(), str::to_owned)
}

fn parking_lorry_description(entry: &ResourceEntry) -> String {
    let title = non_empty(entry.title.as_deref()).unwrap_or_default();
    let detail = non_empty(entry.subtitle.as_deref())
        .map(str::to_owned)
        .or_else(|| description_text(entry))
        .unwrap_or_default();
    format!("{title} \n {detail}")
}

fn warning_title(entry: &ResourceEntry) -> String {
    non_empty(entry.title.as_deref()).map_or_else(|| NO_WARNING.to_owned(), str::to_owned)
}

fn closure_description(entry: &ResourceEntry) -> String {
    if entry.future != Some(true) {
        return NO_CLOSURE.to_owned();
    }
    let title = non_empty(entry.title.as_deref()).unwrap_or_default();
    let date = entry
        .start_timestamp
        .as_ref()
        .and_then(crate::types::Timestamp::calendar_date)
        .map_or_else(
            || INVALID_DATE.to_owned(),
            |d| format!("{}.{}.{}", d.day(), d.month(), d.year()),
        );
    format!("Closure on {title} from \n {date}")
}

fn charging_station_description(entry: &ResourceEntry) -> String {
    match &entry.coordinate {
        Some(coordinate) => {
            let (lat, long) = format_coordinate(coordinate);
            format!("Station at coordinates :\n ({lat} , {long})")
        }
        None => NO_STATION.to_owned(),
    }
}

/// One decimal place, with exact halves rounded away from zero.
///
/// `{:.1}` alone rounds ties to even. At one decimal the only exact binary
/// ties are `x.25` and `x.75`, i.e. values whose quadruple is an odd integer.
fn format_one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    let value = if is_tie {
        (value * 10.0).round() / 10.0
    } else {
        value
    };
    format!("{value:.1}")
}

fn format_coordinate(coordinate: &Coordinate) -> (String, String) {
    let axis = |value: Option<f64>, invalid: &str| {
        value.map_or_else(|| invalid.to_owned(), format_one_decimal)
    };
    (
        axis(
            coordinate.lat.as_ref().and_then(|v| v.as_f64()),
            INVALID_LAT,
        ),
        axis(
            coordinate.long.as_ref().and_then(|v| v.as_f64()),
            INVALID_LONG,
        ),
    )
}

fn description_text(entry: &ResourceEntry) -> Option<String> {
    entry
        .description
        .as_ref()
        .map(crate::types::Text::joined)
        .filter(|text| !text.is_empty())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "reduce_test.rs"]
mod tests;
