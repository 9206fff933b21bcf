use std::{io::Error, path::PathBuf};

use crate::types::User;

#[derive(Debug)]
pub enum UserError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for UserError {
    fn from(err: Error) -> Self {
        UserError::IoError(err)
    }
}

/// Persists the currently selected user between invocations.
pub struct UserManager {
    user: User,
}

impl UserManager {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub async fn load() -> Result<Self, UserError> {
        let path = Self::user_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| UserError::IoError(e))?;
        let user: User = serde_json::from_str(&content).map_err(|e| UserError::SerdeError(e))?;
        Ok(Self { user })
    }

    pub async fn persist(&self) -> Result<(), UserError> {
        let path = Self::user_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| UserError::IoError(e))?;
        }

        let json = serde_json::to_string_pretty(&self.user).map_err(|e| UserError::SerdeError(e))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| UserError::IoError(e))
    }

    pub async fn clear() -> Result<(), UserError> {
        async_fs::remove_file(Self::user_path())
            .await
            .map_err(|e| UserError::IoError(e))
    }

    pub fn current_user(&self) -> &User {
        &self.user
    }

    fn user_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("rewindcli/user.json");
        path
    }
}
