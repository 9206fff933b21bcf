use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// A single scrobble: one recorded play of one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist_name: String,
    pub album_name: String,
    pub cover_url: Option<String>,
    pub date: DateTime<Utc>,
}

impl Track {
    /// Last.fm sometimes returns a 'mbid', but since this isn't always
    /// available, use the timestamp and hope it's unique enough along with
    /// the name. Not guaranteed unique within a batch.
    pub fn id(&self) -> String {
        format!("{}{}", self.date.timestamp(), self.name)
    }
}

/// One year's worth of plays in the timeline. Never constructed for an
/// empty play set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineYear {
    /// Timestamp of the most recent play in this year.
    pub date: DateTime<Utc>,
    /// Four-digit year label derived from `date`.
    pub title: String,
    /// Plays in ascending play order.
    pub items: Vec<Track>,
}

impl TimelineYear {
    pub fn new(date: DateTime<Utc>, items: Vec<Track>) -> Self {
        Self {
            date,
            title: date.format("%Y").to_string(),
            items,
        }
    }

    /// Weekday name of the anchor date, e.g. "Saturday".
    pub fn subtitle(&self) -> String {
        self.date.format("%A").to_string()
    }

    /// Years compare and de-duplicate by their anchor epoch.
    pub fn id(&self) -> i64 {
        self.date.timestamp()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub real_name: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

/// Inclusive [start-of-day, end-of-day] bounds of the calendar day that
/// contains a given instant, resolved in a caller-supplied time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct StartEndDate {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl StartEndDate {
    pub fn new<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> Self {
        Self::for_day(instant.with_timezone(tz).date_naive(), tz)
    }

    pub fn for_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Self {
        let start = resolve_local(day.and_hms_opt(0, 0, 0).unwrap(), tz);
        let end = resolve_local(day.and_hms_opt(23, 59, 59).unwrap(), tz);
        Self { start, end }
    }

    /// Start bound as epoch seconds with no fractional digits, used
    /// verbatim as the `from` query parameter.
    pub fn start_epoch_string(&self) -> String {
        self.start.timestamp().to_string()
    }

    /// End bound as epoch seconds with no fractional digits, used
    /// verbatim as the `to` query parameter.
    pub fn end_epoch_string(&self) -> String {
        self.end.timestamp().to_string()
    }
}

fn resolve_local<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        // DST fold: take the earlier of the two wall-clock instants
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // DST gap: the wall-clock time never occurred, fall back to UTC
        LocalResult::None => local.and_utc(),
    }
}

/// A typed API failure. Flows through the same result channel as data and
/// doubles as the decode target for the error envelope the web service
/// returns in place of the requested payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default, rename = "error")]
    pub code: Option<u32>,
    #[serde(skip)]
    pub origin: String,
    #[serde(skip)]
    pub detail: String,
}

impl ApiError {
    /// Wraps an underlying failure, capturing the call site and a debug
    /// dump of the source error.
    #[track_caller]
    pub fn wrap(context: &str, source: impl std::fmt::Debug + std::fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("{}: {}", context, source),
            code: None,
            origin: format!("{}:{}", location.file(), location.line()),
            detail: format!("{:?}", source),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// On-disk form of a fetched timeline, kept per username together with the
/// instant it was fetched so the freshness gate can decide whether to reuse it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedTimeline {
    pub refreshed_at: DateTime<Utc>,
    pub years: Vec<TimelineYear>,
}

#[derive(Tabled)]
pub struct PlayTableRow {
    pub time: String,
    pub title: String,
    pub artist: String,
    pub album: String,
}

#[derive(Tabled)]
pub struct RecentUserTableRow {
    pub position: usize,
    pub username: String,
}
