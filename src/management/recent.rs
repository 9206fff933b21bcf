use std::{io::Error, path::PathBuf};

#[derive(Debug)]
pub enum RecentError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for RecentError {
    fn from(err: Error) -> Self {
        RecentError::IoError(err)
    }
}

/// Ordered list of usernames the user has looked up, most recent first.
pub struct RecentUsernamesManager {
    usernames: Vec<String>,
}

impl RecentUsernamesManager {
    pub fn new() -> Self {
        Self {
            usernames: Vec::new(),
        }
    }

    pub async fn load() -> Result<Self, RecentError> {
        let path = Self::recent_path();
        let json = async_fs::read_to_string(path)
            .await
            .map_err(|e| RecentError::IoError(e))?;
        let usernames: Vec<String> =
            serde_json::from_str(&json).map_err(|e| RecentError::SerdeError(e))?;
        Ok(Self { usernames })
    }

    /// Inserts at the front. Duplicate insertions are a no-op, so the list
    /// stays deduplicated.
    pub fn add(&mut self, username: &str) {
        if self.usernames.iter().any(|u| u == username) {
            return;
        }

        self.usernames.insert(0, username.to_string());
    }

    pub fn remove(&mut self, username: &str) {
        self.usernames.retain(|u| u != username);
    }

    pub fn usernames(&self) -> &Vec<String> {
        &self.usernames
    }

    pub async fn persist(&self) -> Result<(), RecentError> {
        let path = Self::recent_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| RecentError::IoError(e))?;
        }

        let json =
            serde_json::to_string_pretty(&self.usernames).map_err(|e| RecentError::SerdeError(e))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| RecentError::IoError(e))
    }

    pub async fn clear(&mut self) -> Result<(), RecentError> {
        let path = Self::recent_path();
        self.usernames.clear();
        async_fs::remove_file(path)
            .await
            .map_err(|e| RecentError::IoError(e))
    }

    fn recent_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("rewindcli/recent-usernames.json");
        path
    }
}
