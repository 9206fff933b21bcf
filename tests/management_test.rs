use rewindcli::management::RecentUsernamesManager;

#[test]
fn test_recent_usernames_insert_at_front() {
    let mut recent = RecentUsernamesManager::new();

    recent.add("first");
    recent.add("second");
    recent.add("third");

    assert_eq!(recent.usernames(), &vec!["third", "second", "first"]);
}

#[test]
fn test_recent_usernames_duplicate_add_is_idempotent() {
    let mut recent = RecentUsernamesManager::new();

    recent.add("djw657");
    recent.add("djw657");

    assert_eq!(recent.usernames(), &vec!["djw657"]);

    // A duplicate of an older entry does not move it to the front either
    recent.add("other");
    recent.add("djw657");
    assert_eq!(recent.usernames(), &vec!["other", "djw657"]);
}

#[test]
fn test_recent_usernames_remove() {
    let mut recent = RecentUsernamesManager::new();

    recent.add("first");
    recent.add("second");
    recent.remove("first");

    assert_eq!(recent.usernames(), &vec!["second"]);

    // Removing an absent name is harmless
    recent.remove("missing");
    assert_eq!(recent.usernames(), &vec!["second"]);
}
