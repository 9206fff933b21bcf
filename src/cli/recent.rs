use tabled::Table;

use crate::{
    info,
    management::RecentUsernamesManager,
    success,
    types::RecentUserTableRow,
    warning,
};

/// Lists or edits the recent-usernames list.
pub async fn recent(remove: Option<String>, clear: bool) {
    if clear {
        let mut manager = match RecentUsernamesManager::load().await {
            Ok(manager) => manager,
            Err(_) => {
                info!("No recent usernames to clear.");
                return;
            }
        };

        match manager.clear().await {
            Ok(()) => success!("Cleared recent usernames"),
            Err(e) => warning!("Failed to clear recent usernames: {:?}", e),
        }
        return;
    }

    if let Some(username) = remove {
        let mut manager = match RecentUsernamesManager::load().await {
            Ok(manager) => manager,
            Err(_) => {
                info!("No recent usernames stored.");
                return;
            }
        };

        manager.remove(&username);
        match manager.persist().await {
            Ok(()) => success!("Removed {} from recent usernames", username),
            Err(e) => warning!("Failed to update recent usernames: {:?}", e),
        }
        return;
    }

    let manager = match RecentUsernamesManager::load().await {
        Ok(manager) => manager,
        Err(_) => {
            info!("No recent usernames stored.");
            return;
        }
    };

    if manager.usernames().is_empty() {
        info!("No recent usernames stored.");
        return;
    }

    let rows: Vec<RecentUserTableRow> = manager
        .usernames()
        .iter()
        .enumerate()
        .map(|(i, username)| RecentUserTableRow {
            position: i + 1,
            username: username.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
