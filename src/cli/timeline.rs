use std::time::Duration;

use chrono::{Local, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    lastfm::LastfmClient,
    management::{TimelineCacheManager, UserManager},
    success,
    types::{PlayTableRow, TimelineYear},
    utils, warning,
};

/// Shows the listening timeline: for every prior year, the plays recorded
/// on this calendar day.
///
/// The timeline is rebuilt at most once per calendar day per user; a cached
/// timeline from earlier today is reused unless `force` is set. Passing an
/// explicit `date` always fetches fresh data and leaves the daily cache
/// untouched.
pub async fn timeline(date: Option<String>, user: Option<String>, force: bool) {
    let username = match user {
        Some(username) => username,
        None => match UserManager::load().await {
            Ok(manager) => manager.current_user().username.clone(),
            Err(_) => {
                error!("No user stored. Run rewindcli user <username> first.");
            }
        },
    };

    let pinned_date = date.is_some();
    let today = utils::get_date_from_string(date);

    if !force && !pinned_date {
        if let Ok(cache) = TimelineCacheManager::load(&username).await {
            if !utils::needs_refresh(Some(cache.refreshed_at()), Utc::now(), &Local) {
                info!("Using timeline fetched earlier today (--force to refetch)");
                render_timeline(&username, cache.years());
                return;
            }
        }
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Rewinding through {}'s listening history...", username));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let client = LastfmClient::from_env();
    let (years, failed_years) = client
        .timeline_years_with_failures(today, &username)
        .await;

    pb.finish_and_clear();

    if !failed_years.is_empty() {
        warning!(
            "{} year(s) could not be loaded and are missing from the timeline: {}",
            failed_years.len(),
            failed_years
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        );
    }

    if !pinned_date {
        let cache = TimelineCacheManager::new(&username, Utc::now(), years.clone());
        if let Err(e) = cache.persist().await {
            warning!("Failed to cache timeline: {:?}", e);
        }
    }

    render_timeline(&username, years);
}

fn render_timeline(username: &str, mut years: Vec<TimelineYear>) {
    utils::remove_duplicate_years(&mut years);

    if years.is_empty() {
        info!("No scrobbles found for {} on this day in any year.", username);
        return;
    }

    let total_plays: usize = years.iter().map(|year| year.items.len()).sum();

    for year in &years {
        let rows: Vec<PlayTableRow> = year
            .items
            .iter()
            .map(|track| PlayTableRow {
                time: track.date.with_timezone(&Local).format("%H:%M").to_string(),
                title: track.name.clone(),
                artist: track.artist_name.clone(),
                album: track.album_name.clone(),
            })
            .collect();

        let table = Table::new(rows);
        println!(
            "{title} ({subtitle})\n{table}\n",
            title = year.title,
            subtitle = year.subtitle(),
            table = table
        );
    }

    success!(
        "{} plays across {} years for {}",
        total_plays,
        years.len(),
        username
    );
}
