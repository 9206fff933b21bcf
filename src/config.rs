//! Configuration management for the Last.fm listening rewind CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the Last.fm API key, the web service base URL, and
//! other runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Default base URL of the Last.fm web service.
///
/// Every API method is served from this single endpoint; the concrete
/// operation is selected via the `method` query parameter.
pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `rewindcli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/rewindcli/.env`
/// - macOS: `~/Library/Application Support/rewindcli/.env`
/// - Windows: `%LOCALAPPDATA%/rewindcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails. A missing `.env` file is
/// not an error when the required variables are already present in the process
/// environment.
///
/// # Example
///
/// ```
/// use rewindcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("rewindcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    } else if env::var("LASTFM_API_KEY").is_err() {
        return Err(format!(
            "no .env file at {} and LASTFM_API_KEY is not set",
            path.display()
        ));
    }

    Ok(())
}

/// Returns the Last.fm API key used to authenticate requests.
///
/// Retrieves the `LASTFM_API_KEY` environment variable. The key is obtained
/// by registering an API account with Last.fm and is attached as the
/// `api_key` query parameter on every request.
///
/// # Panics
///
/// Panics if the `LASTFM_API_KEY` environment variable is not set.
///
/// # Security Note
///
/// The API key should be kept out of version control; store it in the
/// `.env` file in the local data directory.
///
/// # Example
///
/// ```
/// let key = lastfm_api_key(); // e.g., "a1b2c3..."
/// ```
pub fn lastfm_api_key() -> String {
    env::var("LASTFM_API_KEY").expect("LASTFM_API_KEY must be set")
}

/// Returns the Last.fm web service base URL.
///
/// Retrieves the `LASTFM_API_URL` environment variable, falling back to the
/// public `ws.audioscrobbler.com` endpoint when unset. Overriding the URL is
/// only useful for pointing the client at a test double.
///
/// # Example
///
/// ```
/// let api_url = lastfm_apiurl(); // e.g., "https://ws.audioscrobbler.com/2.0"
/// ```
pub fn lastfm_apiurl() -> String {
    env::var("LASTFM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
