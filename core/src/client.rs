//! The OpenF1 client: resource accessors over the shared fetch pipeline.
//!
//! # Design
//! `OpenF1Client` holds only static configuration — a base URL and a
//! [`Fetch`] implementation — and carries no mutable state between calls.
//! Every accessor runs the same pipeline: encode the filter into parameter
//! pairs, compose the request URL, fetch the body, decode the JSON array.
//! Driver-scoped `*_latest_*` accessors skip the filter path and compose
//! their pairs by hand: the `driver_number` selector first, then the
//! latest-session sentinels.
//!
//! Single-record accessors (`driver`, `latest_meeting`, `latest_session`,
//! `latest_weather`) uniformly map an empty result to `ApiError::NotFound`.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::query::{encode, latest_session, Param};
use crate::transport::{Fetch, HttpFetcher};
use crate::types::{
    CarData, CarDataFilter, Driver, DriverFilter, Interval, IntervalFilter, Lap, LapFilter,
    Location, LocationFilter, Meeting, MeetingFilter, Pit, PitFilter, Position, PositionFilter,
    RaceControl, RaceControlFilter, Session, SessionFilter, Stint, StintFilter, TeamRadio,
    TeamRadioFilter, Weather, WeatherFilter,
};
use crate::urls::compose;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openf1.org/v1";

/// Client-wide request timeout, matching the original client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const CAR_DATA: &str = "/car_data";
const DRIVERS: &str = "/drivers";
const INTERVALS: &str = "/intervals";
const LAPS: &str = "/laps";
const LOCATION: &str = "/location";
const MEETINGS: &str = "/meetings";
const PIT: &str = "/pit";
const POSITION: &str = "/position";
const RACE_CONTROL: &str = "/race_control";
const SESSIONS: &str = "/sessions";
const STINTS: &str = "/stints";
const TEAM_RADIO: &str = "/team_radio";
const WEATHER: &str = "/weather";

/// Typed client for the OpenF1 REST API.
///
/// Immutable after construction; concurrent calls need no locking as long
/// as the fetcher is itself shareable.
pub struct OpenF1Client<F = HttpFetcher> {
    base_url: String,
    fetcher: F,
}

impl OpenF1Client {
    /// Client against the production API with the default `ureq` fetcher.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Default fetcher against a custom API root, e.g. a local mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_fetcher(base_url, HttpFetcher::new(DEFAULT_TIMEOUT))
    }
}

impl Default for OpenF1Client {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetch> OpenF1Client<F> {
    /// Custom fetcher, the seam unit tests use to stay off the network.
    pub fn with_fetcher(base_url: &str, fetcher: F) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    /// Shared pipeline: compose the URL for `path` + `params`, fetch, decode.
    fn get<T: DeserializeOwned>(&self, path: &str, params: &[Param]) -> Result<T, ApiError> {
        let url = compose(&format!("{}{path}", self.base_url), params)?;
        let body = self.fetcher.fetch(&url)?;
        decode(&body)
    }

    /// `driver_number` selector followed by the latest-session sentinels.
    /// Fails fast when the driver record carries no number.
    fn driver_scoped_latest(&self, driver: &Driver) -> Result<Vec<Param>, ApiError> {
        if driver.driver_number == 0 {
            return Err(ApiError::MissingIdentifier("driver_number"));
        }
        let mut params = vec![Param::new("driver_number", driver.driver_number.to_string())];
        params.extend(latest_session());
        Ok(params)
    }

    // --- /car_data ---

    /// Car telemetry samples matching the filter.
    pub fn car_data(&self, filter: &CarDataFilter) -> Result<Vec<CarData>, ApiError> {
        self.get(CAR_DATA, &encode(filter))
    }

    /// Telemetry for one driver in the latest session.
    pub fn latest_car_data_by_driver(&self, driver: &Driver) -> Result<Vec<CarData>, ApiError> {
        let params = self.driver_scoped_latest(driver)?;
        self.get(CAR_DATA, &params)
    }

    // --- /drivers ---

    /// Driver entries matching the filter.
    pub fn drivers(&self, filter: &DriverFilter) -> Result<Vec<Driver>, ApiError> {
        self.get(DRIVERS, &encode(filter))
    }

    /// Resolve a filter to exactly one driver.
    ///
    /// Requires at least one identifying field (number or any name field).
    /// When neither meeting nor session key is pinned, the lookup is scoped
    /// to the latest session so a name matches one entry rather than one
    /// per session of history.
    pub fn driver(&self, filter: &DriverFilter) -> Result<Driver, ApiError> {
        if filter.driver_number == 0
            && filter.first_name.is_empty()
            && filter.last_name.is_empty()
            && filter.full_name.is_empty()
            && filter.name_acronym.is_empty()
        {
            return Err(ApiError::MissingIdentifier(
                "driver_number or a name field",
            ));
        }

        let mut params = encode(filter);
        if filter.meeting_key == 0 && filter.session_key == 0 {
            params.extend(latest_session());
        }

        let drivers: Vec<Driver> = self.get(DRIVERS, &params)?;
        let count = drivers.len();
        let mut drivers = drivers.into_iter();
        match (drivers.next(), drivers.next()) {
            (Some(driver), None) => Ok(driver),
            (None, _) => Err(ApiError::NotFound("driver")),
            (Some(_), Some(_)) => Err(ApiError::AmbiguousResult {
                resource: "driver",
                count,
            }),
        }
    }

    /// The full grid of the latest session.
    pub fn latest_drivers(&self) -> Result<Vec<Driver>, ApiError> {
        self.get(DRIVERS, &latest_session())
    }

    // --- /intervals ---

    /// Interval records matching the filter.
    pub fn intervals(&self, filter: &IntervalFilter) -> Result<Vec<Interval>, ApiError> {
        self.get(INTERVALS, &encode(filter))
    }

    /// Current intervals for every driver in the latest session.
    pub fn latest_intervals(&self) -> Result<Vec<Interval>, ApiError> {
        self.get(INTERVALS, &latest_session())
    }

    /// Current intervals for one driver in the latest session.
    pub fn driver_latest_intervals(&self, driver: &Driver) -> Result<Vec<Interval>, ApiError> {
        let params = self.driver_scoped_latest(driver)?;
        self.get(INTERVALS, &params)
    }

    // --- /laps ---

    /// Laps matching the filter.
    pub fn laps(&self, filter: &LapFilter) -> Result<Vec<Lap>, ApiError> {
        self.get(LAPS, &encode(filter))
    }

    /// All laps of the latest session.
    pub fn latest_laps(&self) -> Result<Vec<Lap>, ApiError> {
        self.get(LAPS, &latest_session())
    }

    /// One driver's laps in the latest session.
    pub fn latest_laps_by_driver(&self, driver: &Driver) -> Result<Vec<Lap>, ApiError> {
        let params = self.driver_scoped_latest(driver)?;
        self.get(LAPS, &params)
    }

    // --- /location ---

    /// Track locations matching the filter.
    pub fn locations(&self, filter: &LocationFilter) -> Result<Vec<Location>, ApiError> {
        self.get(LOCATION, &encode(filter))
    }

    /// Latest-session locations for every driver.
    pub fn latest_locations(&self) -> Result<Vec<Location>, ApiError> {
        self.get(LOCATION, &latest_session())
    }

    /// Latest-session locations for one driver.
    pub fn driver_latest_location(&self, driver: &Driver) -> Result<Vec<Location>, ApiError> {
        let params = self.driver_scoped_latest(driver)?;
        self.get(LOCATION, &params)
    }

    // --- /meetings ---

    /// Meetings matching the filter.
    pub fn meetings(&self, filter: &MeetingFilter) -> Result<Vec<Meeting>, ApiError> {
        self.get(MEETINGS, &encode(filter))
    }

    /// The most recent meeting, by start date.
    pub fn latest_meeting(&self) -> Result<Meeting, ApiError> {
        let params = [Param::new("meeting_key", "latest")];
        let meetings: Vec<Meeting> = self.get(MEETINGS, &params)?;
        meetings
            .into_iter()
            .max_by_key(|m| m.date_start)
            .ok_or(ApiError::NotFound("meeting"))
    }

    // --- /pit ---

    /// Pit stops matching the filter.
    pub fn pits(&self, filter: &PitFilter) -> Result<Vec<Pit>, ApiError> {
        self.get(PIT, &encode(filter))
    }

    /// Latest-session pit stops for every driver.
    pub fn latest_pits(&self) -> Result<Vec<Pit>, ApiError> {
        self.get(PIT, &latest_session())
    }

    /// Latest-session pit stops for one driver.
    pub fn driver_latest_pits(&self, driver: &Driver) -> Result<Vec<Pit>, ApiError> {
        let params = self.driver_scoped_latest(driver)?;
        self.get(PIT, &params)
    }

    // --- /position ---

    /// Position records matching the filter.
    pub fn positions(&self, filter: &PositionFilter) -> Result<Vec<Position>, ApiError> {
        self.get(POSITION, &encode(filter))
    }

    /// Latest-session positions for every driver.
    pub fn latest_positions(&self) -> Result<Vec<Position>, ApiError> {
        self.get(POSITION, &latest_session())
    }

    /// Latest-session positions for one driver.
    pub fn driver_latest_positions(&self, driver: &Driver) -> Result<Vec<Position>, ApiError> {
        let params = self.driver_scoped_latest(driver)?;
        self.get(POSITION, &params)
    }

    // --- /race_control ---

    /// Race control events matching the filter.
    pub fn race_control(&self, filter: &RaceControlFilter) -> Result<Vec<RaceControl>, ApiError> {
        self.get(RACE_CONTROL, &encode(filter))
    }

    /// All race control events of the latest session.
    pub fn latest_race_control(&self) -> Result<Vec<RaceControl>, ApiError> {
        self.get(RACE_CONTROL, &latest_session())
    }

    /// Latest-session race control events concerning one driver.
    pub fn driver_latest_race_control(
        &self,
        driver: &Driver,
    ) -> Result<Vec<RaceControl>, ApiError> {
        let params = self.driver_scoped_latest(driver)?;
        self.get(RACE_CONTROL, &params)
    }

    // --- /sessions ---

    /// Sessions matching the filter.
    pub fn sessions(&self, filter: &SessionFilter) -> Result<Vec<Session>, ApiError> {
        self.get(SESSIONS, &encode(filter))
    }

    /// The latest session.
    pub fn latest_session(&self) -> Result<Session, ApiError> {
        let sessions: Vec<Session> = self.get(SESSIONS, &latest_session())?;
        sessions
            .into_iter()
            .next()
            .ok_or(ApiError::NotFound("session"))
    }

    // --- /stints ---

    /// Stints matching the filter.
    pub fn stints(&self, filter: &StintFilter) -> Result<Vec<Stint>, ApiError> {
        self.get(STINTS, &encode(filter))
    }

    /// Latest-session stints for every driver.
    pub fn latest_stints(&self) -> Result<Vec<Stint>, ApiError> {
        self.get(STINTS, &latest_session())
    }

    /// Latest-session stints for one driver.
    pub fn driver_latest_stints(&self, driver: &Driver) -> Result<Vec<Stint>, ApiError> {
        let params = self.driver_scoped_latest(driver)?;
        self.get(STINTS, &params)
    }

    // --- /team_radio ---

    /// Team radio exchanges matching the filter.
    pub fn team_radio(&self, filter: &TeamRadioFilter) -> Result<Vec<TeamRadio>, ApiError> {
        self.get(TEAM_RADIO, &encode(filter))
    }

    /// Latest-session radio for every driver.
    pub fn latest_team_radio(&self) -> Result<Vec<TeamRadio>, ApiError> {
        self.get(TEAM_RADIO, &latest_session())
    }

    /// Latest-session radio for one driver.
    pub fn driver_latest_team_radio(&self, driver: &Driver) -> Result<Vec<TeamRadio>, ApiError> {
        let params = self.driver_scoped_latest(driver)?;
        self.get(TEAM_RADIO, &params)
    }

    // --- /weather ---

    /// Weather records matching the filter.
    pub fn weather(&self, filter: &WeatherFilter) -> Result<Vec<Weather>, ApiError> {
        self.get(WEATHER, &encode(filter))
    }

    /// The most recent weather record of the latest session.
    pub fn latest_weather(&self) -> Result<Weather, ApiError> {
        let records: Vec<Weather> = self.get(WEATHER, &latest_session())?;
        records
            .into_iter()
            .next()
            .ok_or(ApiError::NotFound("weather"))
    }
}

/// Parse a response body into the target record shape.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Fetcher returning a canned body while recording every requested URL.
    struct StubFetcher {
        body: Vec<u8>,
        seen: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn returning(body: &str) -> Self {
            Self {
                body: body.as_bytes().to_vec(),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.seen.borrow().clone()
        }
    }

    impl Fetch for &StubFetcher {
        fn fetch(&self, url: &url::Url) -> Result<Vec<u8>, ApiError> {
            self.seen.borrow_mut().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    fn client(fetcher: &StubFetcher) -> OpenF1Client<&StubFetcher> {
        OpenF1Client::with_fetcher("https://api.openf1.org/v1", fetcher)
    }

    fn driver_44() -> Driver {
        Driver {
            driver_number: 44,
            ..Driver::default()
        }
    }

    #[test]
    fn single_selector_builds_expected_query() {
        let fetcher = StubFetcher::returning("[]");
        let filter = LapFilter {
            driver_number: 44,
            ..LapFilter::default()
        };
        client(&fetcher).laps(&filter).unwrap();
        assert_eq!(
            fetcher.requested(),
            vec!["https://api.openf1.org/v1/laps?driver_number=44"]
        );
    }

    #[test]
    fn empty_filter_requests_bare_path() {
        let fetcher = StubFetcher::returning("[]");
        client(&fetcher).laps(&LapFilter::default()).unwrap();
        assert_eq!(fetcher.requested(), vec!["https://api.openf1.org/v1/laps"]);
    }

    #[test]
    fn driver_scoped_latest_appends_sentinels_after_selector() {
        let fetcher = StubFetcher::returning("[]");
        client(&fetcher).latest_laps_by_driver(&driver_44()).unwrap();
        assert_eq!(
            fetcher.requested(),
            vec![
                "https://api.openf1.org/v1/laps?driver_number=44&meeting_key=latest&session_key=latest"
            ]
        );
    }

    #[test]
    fn driver_scoped_latest_requires_driver_number() {
        let fetcher = StubFetcher::returning("[]");
        let err = client(&fetcher)
            .latest_car_data_by_driver(&Driver::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingIdentifier("driver_number")));
        // Fail-fast: no request was issued.
        assert!(fetcher.requested().is_empty());
    }

    #[test]
    fn latest_drivers_uses_sentinel_pair_only() {
        let fetcher = StubFetcher::returning("[]");
        client(&fetcher).latest_drivers().unwrap();
        assert_eq!(
            fetcher.requested(),
            vec!["https://api.openf1.org/v1/drivers?meeting_key=latest&session_key=latest"]
        );
    }

    #[test]
    fn driver_lookup_requires_an_identifier() {
        let fetcher = StubFetcher::returning("[]");
        let err = client(&fetcher).driver(&DriverFilter::default()).unwrap_err();
        assert!(matches!(err, ApiError::MissingIdentifier(_)));
        assert!(fetcher.requested().is_empty());
    }

    #[test]
    fn driver_lookup_scopes_to_latest_session_when_keys_unset() {
        let body = r#"[{"driver_number":1,"full_name":"Max VERSTAPPEN"}]"#;
        let fetcher = StubFetcher::returning(body);
        let filter = DriverFilter {
            full_name: "Max VERSTAPPEN".to_string(),
            ..DriverFilter::default()
        };
        let driver = client(&fetcher).driver(&filter).unwrap();
        assert_eq!(driver.driver_number, 1);
        assert_eq!(
            fetcher.requested(),
            vec![
                "https://api.openf1.org/v1/drivers?full_name=Max+VERSTAPPEN&meeting_key=latest&session_key=latest"
            ]
        );
    }

    #[test]
    fn driver_lookup_keeps_pinned_session() {
        let body = r#"[{"driver_number":44}]"#;
        let fetcher = StubFetcher::returning(body);
        let filter = DriverFilter {
            driver_number: 44,
            session_key: 9165,
            ..DriverFilter::default()
        };
        client(&fetcher).driver(&filter).unwrap();
        assert_eq!(
            fetcher.requested(),
            vec!["https://api.openf1.org/v1/drivers?driver_number=44&session_key=9165"]
        );
    }

    #[test]
    fn driver_lookup_empty_result_is_not_found() {
        let fetcher = StubFetcher::returning("[]");
        let filter = DriverFilter {
            driver_number: 99,
            ..DriverFilter::default()
        };
        let err = client(&fetcher).driver(&filter).unwrap_err();
        assert!(matches!(err, ApiError::NotFound("driver")));
    }

    #[test]
    fn driver_lookup_many_results_is_ambiguous() {
        let body = r#"[{"driver_number":1},{"driver_number":11}]"#;
        let fetcher = StubFetcher::returning(body);
        let filter = DriverFilter {
            last_name: "Verstappen".to_string(),
            ..DriverFilter::default()
        };
        let err = client(&fetcher).driver(&filter).unwrap_err();
        assert!(matches!(
            err,
            ApiError::AmbiguousResult {
                resource: "driver",
                count: 2
            }
        ));
    }

    #[test]
    fn latest_meeting_picks_most_recent_start() {
        let body = r#"[
            {"meeting_key":1218,"meeting_name":"Italian Grand Prix","date_start":"2023-09-01T11:30:00+00:00"},
            {"meeting_key":1219,"meeting_name":"Singapore Grand Prix","date_start":"2023-09-15T09:30:00+00:00"}
        ]"#;
        let fetcher = StubFetcher::returning(body);
        let meeting = client(&fetcher).latest_meeting().unwrap();
        assert_eq!(meeting.meeting_key, 1219);
        assert_eq!(
            fetcher.requested(),
            vec!["https://api.openf1.org/v1/meetings?meeting_key=latest"]
        );
    }

    #[test]
    fn latest_meeting_empty_result_is_not_found() {
        let fetcher = StubFetcher::returning("[]");
        let err = client(&fetcher).latest_meeting().unwrap_err();
        assert!(matches!(err, ApiError::NotFound("meeting")));
    }

    #[test]
    fn latest_session_empty_result_is_not_found() {
        let fetcher = StubFetcher::returning("[]");
        let err = client(&fetcher).latest_session().unwrap_err();
        assert!(matches!(err, ApiError::NotFound("session")));
    }

    #[test]
    fn latest_weather_empty_result_is_not_found() {
        let fetcher = StubFetcher::returning("[]");
        let err = client(&fetcher).latest_weather().unwrap_err();
        assert!(matches!(err, ApiError::NotFound("weather")));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let fetcher = StubFetcher::returning("not json");
        let err = client(&fetcher).latest_laps().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn object_where_array_expected_is_decode_error() {
        let fetcher = StubFetcher::returning(r#"{"detail":"rate limited"}"#);
        let err = client(&fetcher).latest_positions().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn unknown_and_missing_fields_decode_to_defaults() {
        let body = r#"[{"driver_number":63,"novel_field":true}]"#;
        let fetcher = StubFetcher::returning(body);
        let drivers = client(&fetcher).latest_drivers().unwrap();
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].driver_number, 63);
        assert_eq!(drivers[0].full_name, "");
        assert_eq!(drivers[0].session_key, 0);
    }

    #[test]
    fn trailing_slash_in_base_url_is_stripped() {
        let fetcher = StubFetcher::returning("[]");
        let client = OpenF1Client::with_fetcher("http://localhost:3000/", &fetcher);
        client.latest_laps().unwrap();
        assert_eq!(
            fetcher.requested(),
            vec!["http://localhost:3000/laps?meeting_key=latest&session_key=latest"]
        );
    }
}
