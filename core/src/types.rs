//! Filter and response records for every OpenF1 resource.
//!
//! # Design
//! Each resource gets a pair of types sharing its wire attribute names: a
//! response record decoded from the JSON array the API returns, and a filter
//! record whose fields are optional selectors. Filter fields cover exactly
//! the integer, string, and timestamp attributes of the response — floats,
//! bools, arrays, and raw-JSON fields are not filterable, so they simply
//! have no filter counterpart. Unset selectors (`0`, `""`, `None`) are
//! skipped by the encoder; response records take `#[serde(default)]` so
//! missing JSON fields decode to the same zero values and unknown fields
//! are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::query_fields;

// --- /car_data ---

/// One car telemetry sample, published at roughly 3.7 Hz per car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CarData {
    /// Brake pedal application, 0-100.
    pub brake: u32,
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    /// DRS status: 0/1 = off, 8 = eligible, 10/12/14 = on.
    pub drs: u32,
    pub meeting_key: u32,
    pub n_gear: u32,
    pub rpm: u32,
    pub session_key: u32,
    /// Speed in km/h.
    pub speed: u32,
    /// Throttle pedal application, 0-100.
    pub throttle: u32,
}

/// Selectors for `/car_data`.
#[derive(Debug, Clone, Default)]
pub struct CarDataFilter {
    pub brake: u32,
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub drs: u32,
    pub meeting_key: u32,
    pub n_gear: u32,
    pub rpm: u32,
    pub session_key: u32,
    pub speed: u32,
    pub throttle: u32,
}

query_fields!(CarDataFilter {
    brake => "brake",
    date => "date",
    driver_number => "driver_number",
    drs => "drs",
    meeting_key => "meeting_key",
    n_gear => "n_gear",
    rpm => "rpm",
    session_key => "session_key",
    speed => "speed",
    throttle => "throttle",
});

// --- /drivers ---

/// A driver entry for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Driver {
    pub broadcast_name: String,
    pub country_code: String,
    pub driver_number: u32,
    pub first_name: String,
    pub full_name: String,
    pub headshot_url: String,
    pub last_name: String,
    pub meeting_key: u32,
    /// Three-letter acronym, e.g. `VER`.
    pub name_acronym: String,
    pub session_key: u32,
    /// Hex colour of the driver's team, without `#`.
    pub team_colour: String,
    pub team_name: String,
}

/// Selectors for `/drivers`.
#[derive(Debug, Clone, Default)]
pub struct DriverFilter {
    pub broadcast_name: String,
    pub country_code: String,
    pub driver_number: u32,
    pub first_name: String,
    pub full_name: String,
    pub last_name: String,
    pub meeting_key: u32,
    pub name_acronym: String,
    pub session_key: u32,
    pub team_colour: String,
    pub team_name: String,
}

query_fields!(DriverFilter {
    broadcast_name => "broadcast_name",
    country_code => "country_code",
    driver_number => "driver_number",
    first_name => "first_name",
    full_name => "full_name",
    last_name => "last_name",
    meeting_key => "meeting_key",
    name_acronym => "name_acronym",
    session_key => "session_key",
    team_colour => "team_colour",
    team_name => "team_name",
});

// --- /intervals ---

/// Gap between a driver and the race leader / the car ahead. Race sessions
/// only, updated about every four seconds.
///
/// `gap_to_leader` and `interval` are polymorphic on the wire: a number of
/// seconds, a string such as `"+1 LAP"`, or `null` — kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Interval {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub gap_to_leader: Value,
    pub interval: Value,
    pub meeting_key: u32,
    pub session_key: u32,
}

/// Selectors for `/intervals`.
#[derive(Debug, Clone, Default)]
pub struct IntervalFilter {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub meeting_key: u32,
    pub session_key: u32,
}

query_fields!(IntervalFilter {
    date => "date",
    driver_number => "driver_number",
    meeting_key => "meeting_key",
    session_key => "session_key",
});

// --- /laps ---

/// Detailed information about one lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Lap {
    pub date_start: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub duration_sector_1: f64,
    pub duration_sector_2: f64,
    pub duration_sector_3: f64,
    pub i1_speed: u32,
    pub i2_speed: u32,
    pub is_pit_out_lap: bool,
    pub lap_duration: f64,
    pub lap_number: u32,
    pub meeting_key: u32,
    pub segments_sector_1: Vec<u32>,
    pub segments_sector_2: Vec<u32>,
    pub segments_sector_3: Vec<u32>,
    pub session_key: u32,
    /// Speed trap reading at the start/finish line, km/h.
    pub st_speed: u32,
}

/// Selectors for `/laps`.
#[derive(Debug, Clone, Default)]
pub struct LapFilter {
    pub date_start: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub i1_speed: u32,
    pub i2_speed: u32,
    pub lap_number: u32,
    pub meeting_key: u32,
    pub session_key: u32,
    pub st_speed: u32,
}

query_fields!(LapFilter {
    date_start => "date_start",
    driver_number => "driver_number",
    i1_speed => "i1_speed",
    i2_speed => "i2_speed",
    lap_number => "lap_number",
    meeting_key => "meeting_key",
    session_key => "session_key",
    st_speed => "st_speed",
});

// --- /location ---

/// A car's position on the track in the circuit's local coordinate space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Location {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub meeting_key: u32,
    pub session_key: u32,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Selectors for `/location`.
#[derive(Debug, Clone, Default)]
pub struct LocationFilter {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub meeting_key: u32,
    pub session_key: u32,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

query_fields!(LocationFilter {
    date => "date",
    driver_number => "driver_number",
    meeting_key => "meeting_key",
    session_key => "session_key",
    x => "x",
    y => "y",
    z => "z",
});

// --- /meetings ---

/// A Grand Prix or testing weekend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Meeting {
    pub circuit_key: u32,
    pub circuit_short_name: String,
    pub country_code: String,
    pub country_key: u32,
    pub country_name: String,
    pub date_start: Option<DateTime<Utc>>,
    pub gmt_offset: String,
    pub location: String,
    pub meeting_key: u32,
    pub meeting_name: String,
    pub meeting_official_name: String,
    pub year: u32,
}

/// Selectors for `/meetings`.
#[derive(Debug, Clone, Default)]
pub struct MeetingFilter {
    pub circuit_key: u32,
    pub circuit_short_name: String,
    pub country_code: String,
    pub country_key: u32,
    pub country_name: String,
    pub date_start: Option<DateTime<Utc>>,
    pub gmt_offset: String,
    pub location: String,
    pub meeting_key: u32,
    pub meeting_name: String,
    pub meeting_official_name: String,
    pub year: u32,
}

query_fields!(MeetingFilter {
    circuit_key => "circuit_key",
    circuit_short_name => "circuit_short_name",
    country_code => "country_code",
    country_key => "country_key",
    country_name => "country_name",
    date_start => "date_start",
    gmt_offset => "gmt_offset",
    location => "location",
    meeting_key => "meeting_key",
    meeting_name => "meeting_name",
    meeting_official_name => "meeting_official_name",
    year => "year",
});

// --- /pit ---

/// One pit lane pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Pit {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub lap_number: u32,
    pub meeting_key: u32,
    /// Pit lane time in seconds, not the stationary time.
    pub pit_duration: f64,
    pub session_key: u32,
}

/// Selectors for `/pit`.
#[derive(Debug, Clone, Default)]
pub struct PitFilter {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub lap_number: u32,
    pub meeting_key: u32,
    pub session_key: u32,
}

query_fields!(PitFilter {
    date => "date",
    driver_number => "driver_number",
    lap_number => "lap_number",
    meeting_key => "meeting_key",
    session_key => "session_key",
});

// --- /position ---

/// A driver's classification at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Position {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub meeting_key: u32,
    pub position: u32,
    pub session_key: u32,
}

/// Selectors for `/position`.
#[derive(Debug, Clone, Default)]
pub struct PositionFilter {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub meeting_key: u32,
    pub position: u32,
    pub session_key: u32,
}

query_fields!(PositionFilter {
    date => "date",
    driver_number => "driver_number",
    meeting_key => "meeting_key",
    position => "position",
    session_key => "session_key",
});

// --- /race_control ---

/// A race control event: flags, safety car phases, incident notes.
///
/// Several fields are null for track-wide messages, hence the `Option`s;
/// `sector` can be a number or null and stays raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RaceControl {
    /// Event category, e.g. `CarEvent`, `Drs`, `Flag`, `SafetyCar`.
    pub category: String,
    pub date: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub flag: Option<String>,
    pub lap_number: Option<u32>,
    pub meeting_key: u32,
    pub message: String,
    /// `Track`, `Driver`, or `Sector`.
    pub scope: Option<String>,
    pub sector: Value,
    pub session_key: u32,
}

/// Selectors for `/race_control`.
#[derive(Debug, Clone, Default)]
pub struct RaceControlFilter {
    pub category: String,
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub flag: String,
    pub lap_number: u32,
    pub meeting_key: u32,
    pub message: String,
    pub scope: String,
    pub session_key: u32,
}

query_fields!(RaceControlFilter {
    category => "category",
    date => "date",
    driver_number => "driver_number",
    flag => "flag",
    lap_number => "lap_number",
    meeting_key => "meeting_key",
    message => "message",
    scope => "scope",
    session_key => "session_key",
});

// --- /sessions ---

/// One timed period of a meeting: practice, qualifying, or race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Session {
    pub circuit_key: u32,
    pub circuit_short_name: String,
    pub country_code: String,
    pub country_key: u32,
    pub country_name: String,
    pub date_end: Option<DateTime<Utc>>,
    pub date_start: Option<DateTime<Utc>>,
    pub gmt_offset: String,
    pub location: String,
    pub meeting_key: u32,
    pub session_key: u32,
    pub session_name: String,
    pub session_type: String,
    pub year: u32,
}

/// Selectors for `/sessions`.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    pub circuit_key: u32,
    pub circuit_short_name: String,
    pub country_code: String,
    pub country_key: u32,
    pub country_name: String,
    pub date_end: Option<DateTime<Utc>>,
    pub date_start: Option<DateTime<Utc>>,
    pub gmt_offset: String,
    pub location: String,
    pub meeting_key: u32,
    pub session_key: u32,
    pub session_name: String,
    pub session_type: String,
    pub year: u32,
}

query_fields!(SessionFilter {
    circuit_key => "circuit_key",
    circuit_short_name => "circuit_short_name",
    country_code => "country_code",
    country_key => "country_key",
    country_name => "country_name",
    date_end => "date_end",
    date_start => "date_start",
    gmt_offset => "gmt_offset",
    location => "location",
    meeting_key => "meeting_key",
    session_key => "session_key",
    session_name => "session_name",
    session_type => "session_type",
    year => "year",
});

// --- /stints ---

/// A continuous run on one set of tyres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Stint {
    /// Tyre compound, e.g. `SOFT`, `MEDIUM`, `HARD`.
    pub compound: String,
    pub driver_number: u32,
    pub lap_end: u32,
    pub lap_start: u32,
    pub meeting_key: u32,
    pub session_key: u32,
    pub stint_number: u32,
    pub tyre_age_at_start: u32,
}

/// Selectors for `/stints`.
#[derive(Debug, Clone, Default)]
pub struct StintFilter {
    pub compound: String,
    pub driver_number: u32,
    pub lap_end: u32,
    pub lap_start: u32,
    pub meeting_key: u32,
    pub session_key: u32,
    pub stint_number: u32,
    pub tyre_age_at_start: u32,
}

query_fields!(StintFilter {
    compound => "compound",
    driver_number => "driver_number",
    lap_end => "lap_end",
    lap_start => "lap_start",
    meeting_key => "meeting_key",
    session_key => "session_key",
    stint_number => "stint_number",
    tyre_age_at_start => "tyre_age_at_start",
});

// --- /team_radio ---

/// One pit-wall radio exchange, with a link to the recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TeamRadio {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub meeting_key: u32,
    pub recording_url: String,
    pub session_key: u32,
}

/// Selectors for `/team_radio`.
#[derive(Debug, Clone, Default)]
pub struct TeamRadioFilter {
    pub date: Option<DateTime<Utc>>,
    pub driver_number: u32,
    pub meeting_key: u32,
    pub recording_url: String,
    pub session_key: u32,
}

query_fields!(TeamRadioFilter {
    date => "date",
    driver_number => "driver_number",
    meeting_key => "meeting_key",
    recording_url => "recording_url",
    session_key => "session_key",
});

// --- /weather ---

/// Trackside weather, updated about once a minute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Weather {
    /// Air temperature in °C.
    pub air_temperature: f64,
    pub date: Option<DateTime<Utc>>,
    /// Relative humidity percentage.
    pub humidity: f64,
    pub meeting_key: u32,
    /// Atmospheric pressure in hPa.
    pub pressure: f64,
    /// Whether there is rainfall (0 or 1).
    pub rainfall: u32,
    pub session_key: u32,
    /// Track surface temperature in °C.
    pub track_temperature: f64,
    /// Wind direction in degrees.
    pub wind_direction: u32,
    /// Wind speed in m/s.
    pub wind_speed: f64,
}

/// Selectors for `/weather`.
#[derive(Debug, Clone, Default)]
pub struct WeatherFilter {
    pub date: Option<DateTime<Utc>>,
    pub meeting_key: u32,
    pub rainfall: u32,
    pub session_key: u32,
    pub wind_direction: u32,
}

query_fields!(WeatherFilter {
    date => "date",
    meeting_key => "meeting_key",
    rainfall => "rainfall",
    session_key => "session_key",
    wind_direction => "wind_direction",
});
