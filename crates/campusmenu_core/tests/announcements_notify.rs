use campusmenu_core::{
    Announcement, AnnouncementType, ChangeEvent, MenuCategory, MenuDay, MenuItem, Repository,
    Review, SeedData, Student,
};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

#[test]
fn announcements_are_kept_newest_first() {
    let dir = tempdir().unwrap();
    let mut repo = Repository::open(dir.path()).unwrap();

    repo.add_announcement(Announcement::new("oldest", "c", AnnouncementType::General))
        .unwrap();
    repo.add_announcement(Announcement::new("middle", "c", AnnouncementType::Event))
        .unwrap();
    repo.add_announcement(Announcement::new("newest", "c", AnnouncementType::MenuChange))
        .unwrap();

    let titles: Vec<&str> = repo.announcements().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

#[test]
fn announcement_order_survives_reopen() {
    let dir = tempdir().unwrap();
    {
        let mut repo = Repository::open(dir.path()).unwrap();
        repo.add_announcement(Announcement::new("first", "c", AnnouncementType::General))
            .unwrap();
        repo.add_announcement(Announcement::new("second", "c", AnnouncementType::General))
            .unwrap();
    }

    let repo = Repository::open(dir.path()).unwrap();
    assert_eq!(repo.announcements()[0].title, "second");
    assert_eq!(repo.announcements()[1].title, "first");
}

#[test]
fn announcement_update_and_delete_by_id() {
    let dir = tempdir().unwrap();
    let mut repo = Repository::open(dir.path()).unwrap();

    let a = Announcement::new("title", "content", AnnouncementType::Maintenance);
    let a_id = a.id.clone();
    repo.add_announcement(a.clone()).unwrap();

    let mut edited = a;
    edited.content = "rescheduled".to_string();
    repo.update_announcement(edited).unwrap();
    assert_eq!(repo.announcements()[0].content, "rescheduled");

    repo.delete_announcement("no-such-id").unwrap();
    assert_eq!(repo.announcements().len(), 1);
    repo.delete_announcement(&a_id).unwrap();
    assert!(repo.announcements().is_empty());
}

#[test]
fn every_mutation_notifies_subscribers() {
    let dir = tempdir().unwrap();
    let mut repo = Repository::open(dir.path()).unwrap();

    let seen: Rc<RefCell<Vec<ChangeEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    repo.subscribe(move |event| sink.borrow_mut().push(event));

    repo.add_student(Student::new("Ada", "ada@campus.com", "pw", "2024001"))
        .unwrap();
    assert_eq!(seen.borrow().last(), Some(&ChangeEvent::Students));

    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let soup = MenuItem::new("Soup", MenuCategory::Soup, 120);
    let soup_id = soup.id.clone();
    repo.add_menu_day(MenuDay::new(date, vec![soup])).unwrap();
    assert_eq!(seen.borrow().last(), Some(&ChangeEvent::MenuHistory));

    // A review add touches reviews, then the derived menu aggregate.
    repo.add_review(Review::new("s1", "Ada", &soup_id, "Soup", 5))
        .unwrap();
    {
        let events = seen.borrow();
        let tail = &events[events.len() - 2..];
        assert_eq!(tail, &[ChangeEvent::Reviews, ChangeEvent::MenuHistory]);
    }

    repo.login("ada@campus.com", "pw").unwrap().unwrap();
    assert_eq!(seen.borrow().last(), Some(&ChangeEvent::Session));

    repo.update_preferences(Default::default()).unwrap();
    assert_eq!(seen.borrow().last(), Some(&ChangeEvent::Preferences));
}

#[test]
fn seeding_fills_only_empty_collections() {
    let dir = tempdir().unwrap();
    let mut repo = Repository::open(dir.path()).unwrap();
    repo.add_announcement(Announcement::new("existing", "c", AnnouncementType::General))
        .unwrap();

    let seed = SeedData {
        students: vec![Student::new("Demo", "demo@campus.com", "123456", "2024001")],
        menu_days: vec![MenuDay::new(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            vec![MenuItem::new("Soup", MenuCategory::Soup, 120)],
        )],
        announcements: vec![Announcement::new("seeded", "c", AnnouncementType::General)],
    };
    let report = repo.seed_if_empty(seed.clone()).unwrap();

    assert!(report.students_seeded);
    assert!(report.menu_seeded);
    assert!(!report.announcements_seeded);
    assert_eq!(repo.announcements()[0].title, "existing");
    assert_eq!(repo.students().len(), 1);

    // Re-seeding a populated repository changes nothing.
    let report = repo.seed_if_empty(seed).unwrap();
    assert!(!report.students_seeded);
    assert!(!report.menu_seeded);
    assert_eq!(repo.students().len(), 1);
    assert_eq!(repo.menu_history().len(), 1);
}
