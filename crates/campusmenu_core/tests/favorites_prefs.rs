use campusmenu_core::{AppPreferences, NotificationSettings, Repository, Student};
use tempfile::tempdir;

fn logged_in_repo(dir: &std::path::Path) -> Repository {
    let mut repo = Repository::open(dir).unwrap();
    repo.register(Student::new("Ada", "ada@campus.com", "pw", "2024001"))
        .unwrap();
    repo
}

#[test]
fn toggle_favorite_is_its_own_inverse() {
    let dir = tempdir().unwrap();
    let mut repo = logged_in_repo(dir.path());

    repo.toggle_favorite("item-a").unwrap();
    repo.toggle_favorite("item-b").unwrap();
    repo.toggle_favorite("item-c").unwrap();
    assert!(repo.is_favorite("item-b"));

    repo.toggle_favorite("item-b").unwrap();
    assert!(!repo.is_favorite("item-b"));
    // Other entries keep their relative order.
    assert_eq!(
        repo.current_student().unwrap().favorite_menu_items,
        vec!["item-a".to_string(), "item-c".to_string()]
    );

    repo.toggle_favorite("item-b").unwrap();
    assert_eq!(
        repo.current_student().unwrap().favorite_menu_items,
        vec!["item-a".to_string(), "item-c".to_string(), "item-b".to_string()]
    );
}

#[test]
fn favorites_live_on_the_student_record_and_survive_reopen() {
    let dir = tempdir().unwrap();
    {
        let mut repo = logged_in_repo(dir.path());
        repo.toggle_favorite("item-a").unwrap();
        repo.toggle_favorite("item-b").unwrap();
    }

    let repo = Repository::open(dir.path()).unwrap();
    assert!(repo.is_favorite("item-a"));
    assert!(repo.is_favorite("item-b"));
    let stored = repo.find_student_by_email("ada@campus.com").unwrap();
    assert_eq!(stored.favorite_menu_items, vec!["item-a", "item-b"]);
}

#[test]
fn favorites_require_a_student_session() {
    let dir = tempdir().unwrap();
    let mut repo = Repository::open(dir.path()).unwrap();

    repo.toggle_favorite("item-a").unwrap();
    assert!(!repo.is_favorite("item-a"));

    // Admin sessions have no student either.
    repo.login("admin@campus.com", "admin123").unwrap().unwrap();
    repo.toggle_favorite("item-a").unwrap();
    assert!(!repo.is_favorite("item-a"));
}

#[test]
fn preferences_replace_whole_value_and_persist() {
    let dir = tempdir().unwrap();
    {
        let mut repo = Repository::open(dir.path()).unwrap();
        assert_eq!(*repo.preferences(), AppPreferences::default());

        repo.update_preferences(AppPreferences {
            is_dark_mode: true,
            language: "en".to_string(),
            theme: "blue".to_string(),
            notification_settings: NotificationSettings {
                menu_updates: false,
                announcements: true,
            },
        })
        .unwrap();
    }

    let repo = Repository::open(dir.path()).unwrap();
    assert!(repo.preferences().is_dark_mode);
    assert_eq!(repo.preferences().language, "en");
    assert_eq!(repo.preferences().theme, "blue");
    assert!(!repo.preferences().notification_settings.menu_updates);
    assert!(repo.preferences().notification_settings.announcements);
}
