//! Autobahn API response types.
//!
//! The API answers every list request with a single-key envelope named after
//! the resource kind (`{"roadworks": [...]}`, `{"warning": [...]}`). Entries
//! are loosely typed upstream; [`ResourceEntry`] pins down the handful of
//! fields the reducer reads and ignores the rest.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Opaque road name such as `"A1"`, used verbatim in request paths.
pub type RoadId = String;

/// Sub-resource categories served under `/{road}/services/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Roadworks,
    ParkingLorry,
    Warning,
    Closure,
    ElectricChargingStation,
    /// Served by the API but never requested by the load pipeline.
    Webcam,
}

impl ResourceKind {
    /// The five kinds fetched for every road during a load.
    pub const PER_ROAD: [ResourceKind; 5] = [
        ResourceKind::Roadworks,
        ResourceKind::ParkingLorry,
        ResourceKind::Warning,
        ResourceKind::Closure,
        ResourceKind::ElectricChargingStation,
    ];

    /// Path segment and envelope key for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Roadworks => "roadworks",
            ResourceKind::ParkingLorry => "parking_lorry",
            ResourceKind::Warning => "warning",
            ResourceKind::Closure => "closure",
            ResourceKind::ElectricChargingStation => "electric_charging_station",
            ResourceKind::Webcam => "webcam",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roadworks" => Ok(ResourceKind::Roadworks),
            "parking_lorry" => Ok(ResourceKind::ParkingLorry),
            "warning" => Ok(ResourceKind::Warning),
            "closure" => Ok(ResourceKind::Closure),
            "electric_charging_station" => Ok(ResourceKind::ElectricChargingStation),
            "webcam" => Ok(ResourceKind::Webcam),
            other => Err(format!("unknown resource kind \"{other}\"")),
        }
    }
}

/// Envelope of the road list: `{ "roads": ["A1", "A2", ...] }`.
#[derive(Debug, Deserialize)]
pub struct RoadListResponse {
    pub roads: Vec<RoadId>,
}

/// Parsed entries of one `/{road}/services/{kind}` response.
#[derive(Debug, Clone)]
pub struct ResourceList {
    pub kind: ResourceKind,
    pub entries: Vec<ResourceEntry>,
}

/// A single roadwork, warning, closure, parking area, or charging station.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntry {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<Text>,
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    #[serde(default)]
    pub start_timestamp: Option<Timestamp>,
    #[serde(default)]
    pub future: Option<bool>,
}

/// Free text sent either as one string or as a list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Text {
    Line(String),
    Lines(Vec<String>),
}

impl Text {
    /// The text with list entries joined by newlines.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Text::Line(line) => line.clone(),
            Text::Lines(lines) => lines.join("\n"),
        }
    }
}

/// Position of an entry. Both axes arrive as decimal strings on the live API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    #[serde(default)]
    pub lat: Option<CoordinateValue>,
    #[serde(default)]
    pub long: Option<CoordinateValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl CoordinateValue {
    /// Numeric value of the axis, or `None` when it is not a finite number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            CoordinateValue::Number(n) => *n,
            CoordinateValue::Text(s) => parse_leading_f64(s)?,
            CoordinateValue::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Longest numeric prefix of `text` after leading whitespace, so `"52.5°"`
/// reads as `52.5`.
fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim_start();
    text.char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
}

/// Start time of a closure: an ISO-8601 string or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    EpochMillis(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Timestamp {
    /// Calendar date of the timestamp.
    ///
    /// Strings carrying an offset resolve in that offset; epoch milliseconds
    /// and offset-less strings resolve in UTC.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        match self {
            Timestamp::EpochMillis(ms) => {
                DateTime::from_timestamp_millis(*ms).map(|dt| dt.date_naive())
            }
            Timestamp::Text(s) => parse_date_text(s.trim()),
            Timestamp::Other(_) => None,
        }
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    // The live API sends offsets without a colon, e.g. `+0200`.
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
