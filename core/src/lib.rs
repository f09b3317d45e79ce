//! Synchronous typed client for the OpenF1 motorsport telemetry API.
//!
//! # Overview
//! One method per resource (car data, drivers, laps, intervals, locations,
//! meetings, pit stops, positions, race control, sessions, stints, team
//! radio, weather). Each call translates a filter record into query
//! parameters, issues an HTTP GET, and decodes the JSON array into typed
//! records.
//!
//! # Design
//! - `OpenF1Client` is immutable — it holds only a base URL and a fetcher.
//! - Every accessor shares one pipeline: encode → compose → fetch → decode.
//!   Filters are encoded table-driven via the `QueryFilter` trait; unset
//!   fields (zero, empty, `None`) emit no parameter.
//! - The network sits behind the `Fetch` trait so tests substitute a canned
//!   fetcher; integration tests run the real one against the mock server.
//! - The `"latest"` sentinel convention (`meeting_key=latest`,
//!   `session_key=latest`) scopes most accessors to the live or most
//!   recently completed session.

pub mod client;
pub mod error;
pub mod query;
pub mod transport;
pub mod types;
pub mod urls;

pub use client::{OpenF1Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use query::{encode, latest_session, FieldValue, Param, QueryFilter};
pub use transport::{Fetch, HttpFetcher};
pub use types::{
    CarData, CarDataFilter, Driver, DriverFilter, Interval, IntervalFilter, Lap, LapFilter,
    Location, LocationFilter, Meeting, MeetingFilter, Pit, PitFilter, Position, PositionFilter,
    RaceControl, RaceControlFilter, Session, SessionFilter, Stint, StintFilter, TeamRadio,
    TeamRadioFilter, Weather, WeatherFilter,
};
