//! Payload decoding for the Last.fm web service.
//!
//! The service wraps every response in a method-specific envelope and, on
//! failure, returns an error envelope of a different shape on the same
//! endpoint and status code. Decoding therefore runs in three tiers: the
//! primary shape first, then the error envelope, then a wrapped decode
//! failure carrying a diagnostic dump of the original error.
//!
//! Track lists get one extra tolerance layer: each array element is decoded
//! independently and malformed elements are dropped instead of failing the
//! batch. The service appends a transient "now playing" record without a
//! `date` object to recent-track responses, and that record is filtered out
//! exactly this way.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::types::{ApiError, Track, UNKNOWN_ALBUM, UNKNOWN_ARTIST, User};

#[derive(Deserialize)]
struct RecentTracksEnvelope {
    recenttracks: RecentTracksList,
}

#[derive(Deserialize)]
struct RecentTracksList {
    // Kept as raw values so each element can fail to decode on its own.
    track: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct UserInfoEnvelope {
    user: UserRecord,
}

/// A `{"#text": ...}` wrapper object. The wrapper itself is required where
/// it appears; the inner text is not.
#[derive(Deserialize)]
struct TextField {
    #[serde(rename = "#text")]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ImageField {
    #[serde(rename = "#text")]
    text: Option<String>,
}

#[derive(Deserialize)]
struct DateField {
    uts: String,
}

#[derive(Deserialize)]
struct TrackRecord {
    name: String,
    artist: TextField,
    album: TextField,
    image: Option<Vec<ImageField>>,
    date: DateField,
}

#[derive(Deserialize)]
struct UserRecord {
    name: String,
    realname: Option<String>,
    url: Option<String>,
    image: Option<Vec<ImageField>>,
}

impl From<TrackRecord> for Track {
    fn from(record: TrackRecord) -> Self {
        // The timestamp arrives as a numeric string. An unparsable value
        // falls back to epoch 0 rather than dropping the record.
        let timestamp = record.date.uts.parse::<i64>().unwrap_or(0);

        Track {
            name: record.name,
            artist_name: record
                .artist
                .text
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album_name: record
                .album
                .text
                .unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            cover_url: largest_image(record.image),
            date: DateTime::<Utc>::from_timestamp(timestamp, 0)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            username: record.name,
            real_name: record.realname,
            url: record.url,
            image_url: largest_image(record.image),
        }
    }
}

/// The service supplies image variants smallest-first; the last entry is the
/// largest available. An empty list or an empty URL string yields no image.
fn largest_image(images: Option<Vec<ImageField>>) -> Option<String> {
    images
        .and_then(|images| images.into_iter().last())
        .and_then(|image| image.text)
        .filter(|url| !url.is_empty())
}

/// Decodes `bytes` as `T`, falling back to the service's error envelope and
/// finally to a wrapped decode failure.
pub(crate) fn api_decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    match serde_json::from_slice::<T>(bytes) {
        Ok(value) => Ok(value),
        Err(primary) => match serde_json::from_slice::<ApiError>(bytes) {
            Ok(api_error) => Err(api_error),
            Err(_) => Err(ApiError::wrap("unrecognized response payload", primary)),
        },
    }
}

/// Decodes a `user.getRecentTracks` response into the plays it contains.
///
/// Malformed array elements are dropped silently; see the module docs for
/// why this is required rather than merely convenient.
pub fn decode_recent_tracks(bytes: &[u8]) -> Result<Vec<Track>, ApiError> {
    let envelope: RecentTracksEnvelope = api_decode(bytes)?;

    Ok(envelope
        .recenttracks
        .track
        .into_iter()
        .filter_map(|value| serde_json::from_value::<TrackRecord>(value).ok())
        .map(Track::from)
        .collect())
}

/// Decodes a `user.getInfo` response into a [`User`].
pub fn decode_user_info(bytes: &[u8]) -> Result<User, ApiError> {
    let envelope: UserInfoEnvelope = api_decode(bytes)?;
    Ok(envelope.user.into())
}
