use crate::{
    error, info,
    lastfm::LastfmClient,
    management::{RecentUsernamesManager, UserManager},
    success,
    types::User,
    warning,
};

/// Looks up and stores the user whose timeline subsequent commands show.
///
/// With a username, fetches the profile from the API, persists it as the
/// current user, and records the username in the recent-usernames list.
/// Without one, prints the stored user.
pub async fn user(username: Option<String>) {
    match username {
        Some(username) => select_user(&username).await,
        None => show_current_user().await,
    }
}

async fn select_user(username: &str) {
    let client = LastfmClient::from_env();

    let user = match client.user_info(username).await {
        Ok(user) => user,
        Err(e) => {
            error!("Cannot look up user {}: {}", username, e);
        }
    };

    if let Err(e) = UserManager::new(user.clone()).persist().await {
        error!("Failed to store user: {:?}", e);
    }

    let mut recent = match RecentUsernamesManager::load().await {
        Ok(recent) => recent,
        Err(_) => RecentUsernamesManager::new(),
    };
    recent.add(&user.username);
    if let Err(e) = recent.persist().await {
        warning!("Failed to update recent usernames: {:?}", e);
    }

    print_user(&user);
    success!("Stored {} as the current user", user.username);
}

async fn show_current_user() {
    match UserManager::load().await {
        Ok(manager) => print_user(manager.current_user()),
        Err(_) => {
            warning!("No user stored yet. Run rewindcli user <username>.");
        }
    }
}

fn print_user(user: &User) {
    info!("Username: {}", user.username);
    if let Some(real_name) = &user.real_name {
        if !real_name.is_empty() {
            info!("Name: {}", real_name);
        }
    }
    if let Some(url) = &user.url {
        info!("Profile: {}", url);
    }
}
