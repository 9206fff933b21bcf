use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use rewindcli::lastfm::{Route, RouteError};
use rewindcli::types::StartEndDate;

fn query_map(url: &reqwest::Url) -> HashMap<String, String> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn test_recent_tracks_route_query_parameters() {
    let instant = Utc.timestamp_opt(1_597_673_898, 0).unwrap();
    let route = Route::RecentTracks {
        window: StartEndDate::new(instant, &Utc),
        username: "djw657".to_string(),
    };

    let url = route
        .url("test-api-key", "https://ws.audioscrobbler.com/2.0")
        .unwrap();
    let query = query_map(&url);

    assert_eq!(query.get("api_key").map(String::as_str), Some("test-api-key"));
    assert_eq!(query.get("format").map(String::as_str), Some("json"));
    assert_eq!(
        query.get("method").map(String::as_str),
        Some("user.getRecentTracks")
    );
    assert_eq!(query.get("from").map(String::as_str), Some("1597622400"));
    assert_eq!(query.get("to").map(String::as_str), Some("1597708799"));
    assert_eq!(query.get("user").map(String::as_str), Some("djw657"));

    // The base URL's path survives parameter injection
    assert_eq!(url.path(), "/2.0");
}

#[test]
fn test_user_info_route_query_parameters() {
    let route = Route::UserInfo {
        username: "djw657".to_string(),
    };

    let url = route
        .url("test-api-key", "https://ws.audioscrobbler.com/2.0")
        .unwrap();
    let query = query_map(&url);

    assert_eq!(query.get("method").map(String::as_str), Some("user.getInfo"));
    assert_eq!(query.get("user").map(String::as_str), Some("djw657"));
    assert_eq!(query.get("format").map(String::as_str), Some("json"));
    assert!(!query.contains_key("from"));
    assert!(!query.contains_key("to"));
}

#[test]
fn test_unparsable_base_url_fails_with_bad_url() {
    let route = Route::UserInfo {
        username: "djw657".to_string(),
    };

    let result = route.url("test-api-key", "not a base url");

    assert!(matches!(result, Err(RouteError::BadUrl(_))));
}
