use chrono::{Datelike, NaiveDate};
use futures::future::join_all;

use crate::{
    types::{TimelineYear, Track},
    utils,
};

use super::client::LastfmClient;

/// Earliest year a timeline reaches back to. Scrobbling services came
/// online around then, so older anniversaries cannot have data.
pub const START_YEAR: i32 = 2002;

impl LastfmClient {
    /// Builds the listening timeline for `username` anchored on `today`.
    ///
    /// One `user.getRecentTracks` request is issued per prior
    /// year-anniversary of `today` back to [`START_YEAR`], all of them
    /// in flight concurrently. Years whose request fails and years with no
    /// plays are dropped; the rest become one [`TimelineYear`] each,
    /// ordered newest first.
    ///
    /// This never fails as a whole: a year that errors is indistinguishable
    /// from a year with no scrobbles. Callers that need to tell the two
    /// apart should use [`timeline_years_with_failures`].
    ///
    /// Dropping the returned future abandons every outstanding per-year
    /// request with it.
    ///
    /// [`timeline_years_with_failures`]: LastfmClient::timeline_years_with_failures
    pub async fn timeline_years(&self, today: NaiveDate, username: &str) -> Vec<TimelineYear> {
        self.timeline_years_with_failures(today, username).await.0
    }

    /// Same as [`timeline_years`], but additionally reports the anchor
    /// years whose fetch failed, so callers can distinguish "no scrobbles
    /// that year" from "that year could not be loaded".
    ///
    /// [`timeline_years`]: LastfmClient::timeline_years
    pub async fn timeline_years_with_failures(
        &self,
        today: NaiveDate,
        username: &str,
    ) -> (Vec<TimelineYear>, Vec<i32>) {
        let anchors = utils::anniversary_dates(today, START_YEAR);

        let requests = anchors
            .iter()
            .map(|day| self.recent_tracks(*day, username));
        let results = join_all(requests).await;

        let mut years = Vec::new();
        let mut failed_years = Vec::new();
        for (day, result) in anchors.iter().zip(results) {
            match result {
                Ok(tracks) => {
                    if let Some(year) = bucket_year(tracks) {
                        years.push(year);
                    }
                }
                Err(_) => failed_years.push(day.year()),
            }
        }

        years.sort_by_key(TimelineYear::id);
        years.reverse();

        (years, failed_years)
    }
}

/// Folds one day's plays into a timeline entry.
///
/// The entry is anchored on the most recent play rather than the requested
/// day, so a set of plays spanning local midnight is labeled by when the
/// listening actually happened. Returns `None` for an empty play set; an
/// empty year is dropped, never represented as an empty bucket.
pub fn bucket_year(mut tracks: Vec<Track>) -> Option<TimelineYear> {
    let anchor = tracks.iter().map(|track| track.date).max()?;
    tracks.sort_by_key(|track| track.date);
    Some(TimelineYear::new(anchor, tracks))
}
