use std::{io::Error, path::PathBuf};

use chrono::{DateTime, Utc};

use crate::types::{CachedTimeline, TimelineYear};

#[derive(Debug)]
pub enum TimelineCacheError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for TimelineCacheError {
    fn from(err: Error) -> Self {
        TimelineCacheError::IoError(err)
    }
}

/// On-disk cache of the last fetched timeline, one file per username.
pub struct TimelineCacheManager {
    username: String,
    cache: CachedTimeline,
}

impl TimelineCacheManager {
    pub fn new(username: &str, refreshed_at: DateTime<Utc>, years: Vec<TimelineYear>) -> Self {
        Self {
            username: username.to_string(),
            cache: CachedTimeline {
                refreshed_at,
                years,
            },
        }
    }

    pub async fn load(username: &str) -> Result<Self, TimelineCacheError> {
        let path = Self::cache_path(username);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| TimelineCacheError::IoError(e))?;
        let cache: CachedTimeline =
            serde_json::from_str(&content).map_err(|e| TimelineCacheError::SerdeError(e))?;
        Ok(Self {
            username: username.to_string(),
            cache,
        })
    }

    pub async fn persist(&self) -> Result<(), TimelineCacheError> {
        let path = Self::cache_path(&self.username);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| TimelineCacheError::IoError(e))?;
        }

        let json = serde_json::to_string_pretty(&self.cache)
            .map_err(|e| TimelineCacheError::SerdeError(e))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| TimelineCacheError::IoError(e))
    }

    pub fn years(&self) -> Vec<TimelineYear> {
        self.cache.years.clone()
    }

    pub fn refreshed_at(&self) -> DateTime<Utc> {
        self.cache.refreshed_at
    }

    fn cache_path(username: &str) -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(format!(
            "rewindcli/cache/{username}/timeline.json",
            username = username
        ));
        path
    }
}
