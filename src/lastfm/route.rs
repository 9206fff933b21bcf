use reqwest::Url;

use crate::types::StartEndDate;

/// A logical Last.fm API intent, mapped onto the wire by [`Route::url`].
///
/// The web service exposes every operation on a single endpoint and selects
/// the operation through the `method` query parameter, so a route is nothing
/// more than a method name plus its method-specific parameters.
#[derive(Debug, Clone)]
pub enum Route {
    /// Plays recorded within a single calendar day for one user.
    RecentTracks {
        window: StartEndDate,
        username: String,
    },
    /// Profile data for one user.
    UserInfo { username: String },
}

#[derive(Debug)]
pub enum RouteError {
    /// The configured base URL cannot be combined with the query
    /// parameters into a valid request URL.
    BadUrl(String),
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::BadUrl(reason) => write!(f, "bad base URL: {}", reason),
        }
    }
}

impl std::error::Error for RouteError {}

impl Route {
    /// The Last.fm API method name
    fn method(&self) -> &'static str {
        match self {
            Route::RecentTracks { .. } => "user.getRecentTracks",
            Route::UserInfo { .. } => "user.getInfo",
        }
    }

    fn additional_query(&self) -> Vec<(&'static str, String)> {
        match self {
            Route::RecentTracks { window, username } => vec![
                ("from", window.start_epoch_string()),
                ("to", window.end_epoch_string()),
                ("user", username.clone()),
            ],
            Route::UserInfo { username } => vec![("user", username.clone())],
        }
    }

    /// Builds the full GET URL for this route.
    ///
    /// Every request carries the common parameters `api_key`, `format=json`
    /// and `method`; the method-specific parameters are appended after them.
    /// `user.getRecentTracks` additionally sends the day window as `from`/`to`
    /// epoch-second strings.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::BadUrl`] when `base_url` does not parse. This is
    /// a configuration mistake rather than a runtime condition, but it is
    /// reported as a value instead of panicking.
    pub fn url(&self, api_key: &str, base_url: &str) -> Result<Url, RouteError> {
        let mut url =
            Url::parse(base_url).map_err(|e| RouteError::BadUrl(e.to_string()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", api_key);
            query.append_pair("format", "json");
            query.append_pair("method", self.method());
            for (name, value) in self.additional_query() {
                query.append_pair(name, &value);
            }
        }

        Ok(url)
    }
}
