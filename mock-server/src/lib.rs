//! In-memory mock of the OpenF1 REST API for integration tests.
//!
//! # Design
//! One generic route serves a fixed fixture set for every resource. Query
//! parameters are applied as equality filters against the fixture records,
//! covering the subset of the real API's query language the client uses.
//! The `latest` sentinel for `meeting_key`/`session_key` resolves to the
//! highest value of that field across the resource's fixtures, emulating
//! "the most recently started" meeting/session.

use std::collections::HashMap;
use std::sync::OnceLock;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub fn app() -> Router {
    Router::new().route("/{resource}", get(query_resource))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn query_resource(
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let rows = fixtures()
        .get(resource.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;

    let matching: Vec<Value> = rows
        .iter()
        .filter(|row| {
            params.iter().all(|(key, value)| {
                let value = resolve_latest(rows, key, value);
                field_matches(row, key, &value)
            })
        })
        .cloned()
        .collect();

    Ok(Json(Value::Array(matching)))
}

/// Resolve the `latest` sentinel to the highest meeting/session key present
/// in the fixtures; other values pass through unchanged.
fn resolve_latest(rows: &[Value], key: &str, value: &str) -> String {
    if value == "latest" && (key == "meeting_key" || key == "session_key") {
        rows.iter()
            .filter_map(|row| row.get(key).and_then(Value::as_i64))
            .max()
            .map(|max| max.to_string())
            .unwrap_or_default()
    } else {
        value.to_string()
    }
}

/// String-level equality between a record field and a query value, the way
/// the real API compares them.
fn field_matches(row: &Value, key: &str, value: &str) -> bool {
    match row.get(key) {
        Some(Value::Number(n)) => n.to_string() == value,
        Some(Value::String(s)) => s == value,
        Some(Value::Bool(b)) => b.to_string() == value,
        _ => false,
    }
}

/// Fixture data: the 2023 Singapore Grand Prix weekend (meeting 1219,
/// qualifying session 9161, race session 9165), plus the preceding Italian
/// Grand Prix in `/meetings` so "latest" picks between two.
fn fixtures() -> &'static HashMap<&'static str, Vec<Value>> {
    static FIXTURES: OnceLock<HashMap<&'static str, Vec<Value>>> = OnceLock::new();
    FIXTURES.get_or_init(|| {
        let mut map = HashMap::new();

        map.insert(
            "meetings",
            vec![
                json!({
                    "circuit_key": 39, "circuit_short_name": "Monza",
                    "country_code": "ITA", "country_key": 13, "country_name": "Italy",
                    "date_start": "2023-09-01T11:30:00+00:00", "gmt_offset": "02:00:00",
                    "location": "Monza", "meeting_key": 1218,
                    "meeting_name": "Italian Grand Prix",
                    "meeting_official_name": "FORMULA 1 GRAN PREMIO D'ITALIA 2023",
                    "year": 2023
                }),
                json!({
                    "circuit_key": 61, "circuit_short_name": "Singapore",
                    "country_code": "SGP", "country_key": 157, "country_name": "Singapore",
                    "date_start": "2023-09-15T09:30:00+00:00", "gmt_offset": "08:00:00",
                    "location": "Marina Bay", "meeting_key": 1219,
                    "meeting_name": "Singapore Grand Prix",
                    "meeting_official_name": "FORMULA 1 SINGAPORE AIRLINES SINGAPORE GRAND PRIX 2023",
                    "year": 2023
                }),
            ],
        );

        map.insert(
            "sessions",
            vec![
                json!({
                    "circuit_key": 61, "circuit_short_name": "Singapore",
                    "country_code": "SGP", "country_key": 157, "country_name": "Singapore",
                    "date_end": "2023-09-16T14:00:00+00:00",
                    "date_start": "2023-09-16T13:00:00+00:00",
                    "gmt_offset": "08:00:00", "location": "Marina Bay",
                    "meeting_key": 1219, "session_key": 9161,
                    "session_name": "Qualifying", "session_type": "Qualifying",
                    "year": 2023
                }),
                json!({
                    "circuit_key": 61, "circuit_short_name": "Singapore",
                    "country_code": "SGP", "country_key": 157, "country_name": "Singapore",
                    "date_end": "2023-09-17T14:00:00+00:00",
                    "date_start": "2023-09-17T12:00:00+00:00",
                    "gmt_offset": "08:00:00", "location": "Marina Bay",
                    "meeting_key": 1219, "session_key": 9165,
                    "session_name": "Race", "session_type": "Race",
                    "year": 2023
                }),
            ],
        );

        map.insert(
            "drivers",
            vec![
                json!({
                    "broadcast_name": "M VERSTAPPEN", "country_code": "NED",
                    "driver_number": 1, "first_name": "Max",
                    "full_name": "Max VERSTAPPEN", "headshot_url": "",
                    "last_name": "Verstappen", "meeting_key": 1219,
                    "name_acronym": "VER", "session_key": 9161,
                    "team_colour": "3671C6", "team_name": "Red Bull Racing"
                }),
                json!({
                    "broadcast_name": "M VERSTAPPEN", "country_code": "NED",
                    "driver_number": 1, "first_name": "Max",
                    "full_name": "Max VERSTAPPEN", "headshot_url": "",
                    "last_name": "Verstappen", "meeting_key": 1219,
                    "name_acronym": "VER", "session_key": 9165,
                    "team_colour": "3671C6", "team_name": "Red Bull Racing"
                }),
                json!({
                    "broadcast_name": "L HAMILTON", "country_code": "GBR",
                    "driver_number": 44, "first_name": "Lewis",
                    "full_name": "Lewis HAMILTON", "headshot_url": "",
                    "last_name": "Hamilton", "meeting_key": 1219,
                    "name_acronym": "HAM", "session_key": 9165,
                    "team_colour": "6CD3BF", "team_name": "Mercedes"
                }),
            ],
        );

        map.insert(
            "laps",
            vec![
                json!({
                    "date_start": "2023-09-16T13:12:09+00:00", "driver_number": 1,
                    "duration_sector_1": 26.4, "duration_sector_2": 38.2,
                    "duration_sector_3": 26.7, "i1_speed": 307, "i2_speed": 277,
                    "is_pit_out_lap": false, "lap_duration": 91.3, "lap_number": 8,
                    "meeting_key": 1219, "segments_sector_1": [2049, 2049],
                    "segments_sector_2": [2051], "segments_sector_3": [2049],
                    "session_key": 9161, "st_speed": 298
                }),
                json!({
                    "date_start": "2023-09-17T12:33:09+00:00", "driver_number": 1,
                    "duration_sector_1": 27.1, "duration_sector_2": 39.0,
                    "duration_sector_3": 27.4, "i1_speed": 301, "i2_speed": 270,
                    "is_pit_out_lap": false, "lap_duration": 93.5, "lap_number": 12,
                    "meeting_key": 1219, "segments_sector_1": [2049],
                    "segments_sector_2": [2049, 2051], "segments_sector_3": [2049],
                    "session_key": 9165, "st_speed": 291
                }),
                json!({
                    "date_start": "2023-09-17T12:33:15+00:00", "driver_number": 44,
                    "duration_sector_1": 27.3, "duration_sector_2": 38.8,
                    "duration_sector_3": 27.2, "i1_speed": 303, "i2_speed": 274,
                    "is_pit_out_lap": false, "lap_duration": 93.3, "lap_number": 12,
                    "meeting_key": 1219, "segments_sector_1": [2049, 2051],
                    "segments_sector_2": [2049], "segments_sector_3": [2051],
                    "session_key": 9165, "st_speed": 294
                }),
            ],
        );

        map.insert(
            "car_data",
            vec![
                json!({
                    "brake": 0, "date": "2023-09-17T12:33:10+00:00",
                    "driver_number": 1, "drs": 12, "meeting_key": 1219,
                    "n_gear": 8, "rpm": 11894, "session_key": 9165,
                    "speed": 301, "throttle": 99
                }),
                json!({
                    "brake": 100, "date": "2023-09-17T12:33:21+00:00",
                    "driver_number": 44, "drs": 0, "meeting_key": 1219,
                    "n_gear": 3, "rpm": 8349, "session_key": 9165,
                    "speed": 141, "throttle": 0
                }),
            ],
        );

        map.insert(
            "intervals",
            vec![
                json!({
                    "date": "2023-09-17T13:31:02+00:00", "driver_number": 44,
                    "gap_to_leader": 41.019, "interval": 0.003,
                    "meeting_key": 1219, "session_key": 9165
                }),
                json!({
                    "date": "2023-09-17T13:31:02+00:00", "driver_number": 77,
                    "gap_to_leader": "+1 LAP", "interval": null,
                    "meeting_key": 1219, "session_key": 9165
                }),
            ],
        );

        map.insert(
            "location",
            vec![json!({
                "date": "2023-09-17T12:35:04+00:00", "driver_number": 1,
                "meeting_key": 1219, "session_key": 9165,
                "x": 567, "y": 3195, "z": 187
            })],
        );

        map.insert(
            "pit",
            vec![json!({
                "date": "2023-09-17T13:05:11+00:00", "driver_number": 44,
                "lap_number": 14, "meeting_key": 1219,
                "pit_duration": 24.5, "session_key": 9165
            })],
        );

        map.insert(
            "position",
            vec![
                json!({
                    "date": "2023-09-17T12:00:00+00:00", "driver_number": 1,
                    "meeting_key": 1219, "position": 1, "session_key": 9165
                }),
                json!({
                    "date": "2023-09-17T12:00:00+00:00", "driver_number": 44,
                    "meeting_key": 1219, "position": 3, "session_key": 9165
                }),
            ],
        );

        map.insert(
            "race_control",
            vec![
                json!({
                    "category": "Flag", "date": "2023-09-17T12:00:00+00:00",
                    "driver_number": null, "flag": "GREEN", "lap_number": 1,
                    "meeting_key": 1219, "message": "GREEN LIGHT - PIT EXIT OPEN",
                    "scope": "Track", "sector": null, "session_key": 9165
                }),
                json!({
                    "category": "CarEvent", "date": "2023-09-17T13:11:43+00:00",
                    "driver_number": 44, "flag": "BLACK AND WHITE", "lap_number": 20,
                    "meeting_key": 1219,
                    "message": "BLACK AND WHITE FLAG FOR CAR 44 (HAM) - TRACK LIMITS",
                    "scope": "Driver", "sector": null, "session_key": 9165
                }),
            ],
        );

        map.insert(
            "stints",
            vec![
                json!({
                    "compound": "MEDIUM", "driver_number": 1, "lap_end": 17,
                    "lap_start": 1, "meeting_key": 1219, "session_key": 9165,
                    "stint_number": 1, "tyre_age_at_start": 3
                }),
                json!({
                    "compound": "HARD", "driver_number": 1, "lap_end": 62,
                    "lap_start": 18, "meeting_key": 1219, "session_key": 9165,
                    "stint_number": 2, "tyre_age_at_start": 0
                }),
            ],
        );

        map.insert(
            "team_radio",
            vec![json!({
                "date": "2023-09-17T13:20:01+00:00", "driver_number": 44,
                "meeting_key": 1219,
                "recording_url": "https://livetiming.formula1.com/static/2023/44_radio.mp3",
                "session_key": 9165
            })],
        );

        map.insert(
            "weather",
            vec![
                json!({
                    "air_temperature": 29.8, "date": "2023-09-17T12:01:00+00:00",
                    "humidity": 71.0, "meeting_key": 1219, "pressure": 1009.1,
                    "rainfall": 0, "session_key": 9165,
                    "track_temperature": 34.2, "wind_direction": 136,
                    "wind_speed": 2.2
                }),
                json!({
                    "air_temperature": 29.5, "date": "2023-09-17T12:02:00+00:00",
                    "humidity": 72.0, "meeting_key": 1219, "pressure": 1009.0,
                    "rainfall": 0, "session_key": 9165,
                    "track_temperature": 33.9, "wind_direction": 141,
                    "wind_speed": 2.0
                }),
            ],
        );

        map
    })
}
