use std::collections::{HashMap, HashSet};

use axum::{Router, extract::Query, routing::get};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use rewindcli::lastfm::LastfmClient;
use rewindcli::lastfm::timeline::bucket_year;
use rewindcli::types::Track;

// Helper function to create a test track
fn create_test_track(name: &str, uts: i64) -> Track {
    Track {
        name: name.to_string(),
        artist_name: "Incubus".to_string(),
        album_name: "Morning View".to_string(),
        cover_url: None,
        date: Utc.timestamp_opt(uts, 0).unwrap(),
    }
}

/// Binds an ephemeral port, serves `app` in the background, and returns the
/// base URL to point the client at.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn recent_tracks_body(from: i64) -> String {
    // Newest-first, like the real service; the aggregator re-sorts.
    format!(
        r##"{{"recenttracks":{{"track":[
            {{"name":"Evening Song","artist":{{"#text":"The Avett Brothers"}},"album":{{"#text":"Magpie and the Dandelion"}},"image":[{{"size":"extralarge","#text":"https://images.example/xl.png"}}],"date":{{"uts":"{}"}}}},
            {{"name":"Morning Song","artist":{{"#text":"The Avett Brothers"}},"album":{{"#text":"Magpie and the Dandelion"}},"image":[],"date":{{"uts":"{}"}}}}
        ]}}}}"##,
        from + 7200,
        from + 3600
    )
}

/// A canned API double. Years in `play_years` answer with two plays, years
/// in `fail_years` answer with a non-JSON body, everything else is an empty
/// (but well-formed) day.
fn mock_api(play_years: &[i32], fail_years: &[i32]) -> Router {
    let play: HashSet<i32> = play_years.iter().copied().collect();
    let fail: HashSet<i32> = fail_years.iter().copied().collect();

    Router::new().route(
        "/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let play = play.clone();
            let fail = fail.clone();
            async move {
                match params.get("method").map(String::as_str) {
                    Some("user.getRecentTracks") => {
                        let from: i64 = params
                            .get("from")
                            .and_then(|v| v.parse().ok())
                            .unwrap_or(0);
                        let year = DateTime::<Utc>::from_timestamp(from, 0).unwrap().year();

                        if fail.contains(&year) {
                            "upstream exploded".to_string()
                        } else if play.contains(&year) {
                            recent_tracks_body(from)
                        } else {
                            r#"{"recenttracks":{"track":[]}}"#.to_string()
                        }
                    }
                    Some("user.getInfo") => {
                        r#"{"user":{"name":"djw657","realname":"David","url":"https://www.last.fm/user/djw657"}}"#
                            .to_string()
                    }
                    _ => r#"{"error":3,"message":"Invalid Method"}"#.to_string(),
                }
            }
        }),
    )
}

#[tokio::test]
async fn test_timeline_buckets_are_newest_first_and_skip_empty_years() {
    let base = serve(mock_api(&[2020, 2022], &[])).await;
    let client = LastfmClient::new("test-key", base);
    let today = NaiveDate::from_ymd_opt(2023, 8, 16).unwrap();

    let years = client.timeline_years(today, "djw657").await;

    // Years without plays are dropped entirely, the rest come newest first
    assert_eq!(years.len(), 2);
    assert_eq!(years[0].title, "2022");
    assert_eq!(years[1].title, "2020");

    // Items are re-sorted ascending and the bucket anchors on the latest play
    for year in &years {
        assert_eq!(year.items.len(), 2);
        assert_eq!(year.items[0].name, "Morning Song");
        assert_eq!(year.items[1].name, "Evening Song");
        assert_eq!(year.date, year.items[1].date);
    }
}

#[tokio::test]
async fn test_failed_years_are_omitted_but_reported() {
    let base = serve(mock_api(&[2020, 2022], &[2021])).await;
    let client = LastfmClient::new("test-key", base);
    let today = NaiveDate::from_ymd_opt(2023, 8, 16).unwrap();

    let (years, failed) = client.timeline_years_with_failures(today, "djw657").await;

    // A failed year renders exactly like an empty one in the timeline...
    let titles: Vec<&str> = years.iter().map(|y| y.title.as_str()).collect();
    assert_eq!(titles, vec!["2022", "2020"]);

    // ...but is visible through the diagnostic side channel
    assert_eq!(failed, vec![2021]);
}

#[tokio::test]
async fn test_timeline_is_deterministic_across_runs() {
    let base = serve(mock_api(&[2010, 2015, 2020], &[])).await;
    let client = LastfmClient::new("test-key", base);
    let today = NaiveDate::from_ymd_opt(2023, 8, 16).unwrap();

    let first = client.timeline_years(today, "djw657").await;
    let second = client.timeline_years(today, "djw657").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_timeline_is_empty_in_the_start_year() {
    // No anniversaries to fetch means no requests at all, so a dead base
    // URL must not matter.
    let client = LastfmClient::new("test-key", "http://127.0.0.1:9");
    let today = NaiveDate::from_ymd_opt(2002, 8, 16).unwrap();

    let (years, failed) = client.timeline_years_with_failures(today, "djw657").await;

    assert!(years.is_empty());
    assert!(failed.is_empty());
}

#[tokio::test]
async fn test_user_info_through_client() {
    let base = serve(mock_api(&[], &[])).await;
    let client = LastfmClient::new("test-key", base);

    let user = client.user_info("djw657").await.unwrap();

    assert_eq!(user.username, "djw657");
    assert_eq!(user.real_name.as_deref(), Some("David"));
    assert_eq!(user.url.as_deref(), Some("https://www.last.fm/user/djw657"));
}

#[tokio::test]
async fn test_transport_failure_is_wrapped_as_api_error() {
    // Nothing listens here
    let client = LastfmClient::new("test-key", "http://127.0.0.1:9");

    let err = client.user_info("djw657").await.unwrap_err();

    assert!(err.message.starts_with("request failed"));
    assert!(!err.detail.is_empty());
}

#[test]
fn test_bucket_year_anchors_on_latest_play_and_sorts_ascending() {
    let tracks = vec![
        create_test_track("Second", 200),
        create_test_track("First", 100),
        create_test_track("Third", 300),
    ];

    let year = bucket_year(tracks).unwrap();

    assert_eq!(year.date.timestamp(), 300);
    let names: Vec<&str> = year.items.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_bucket_year_returns_none_for_empty_plays() {
    assert!(bucket_year(Vec::new()).is_none());
}
