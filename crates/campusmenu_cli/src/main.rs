//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `campusmenu_core` linkage:
//!   open a repository, apply the demo seed on first run, print today's menu.
//! - Keep output deterministic enough for quick local sanity checks.

use chrono::{Datelike, Days, Local, Weekday};

use campusmenu_core::{
    default_log_level, init_logging, Allergen, Announcement, AnnouncementType, MenuCategory,
    MenuDay, MenuItem, Repository, SeedData, Student,
};

fn main() {
    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "campusmenu-data".to_string());

    if let Err(err) = init_logging(default_log_level(), format!("{data_dir}/logs")) {
        eprintln!("logging unavailable: {err}");
    }

    let mut repo = match Repository::open(&data_dir) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("failed to open repository at `{data_dir}`: {err}");
            std::process::exit(1);
        }
    };

    match repo.seed_if_empty(demo_seed()) {
        Ok(report) => {
            if report.menu_seeded {
                println!("seeded demo menu ({} days)", repo.menu_history().len());
            }
        }
        Err(err) => eprintln!("seeding incomplete: {err}"),
    }

    println!("campusmenu_core version={}", campusmenu_core::core_version());
    match repo.get_today_menu() {
        Some(day) => {
            println!("menu for {}:", day.date);
            for item in &day.items {
                println!(
                    "  {:<24} {:>4} kcal  rating {:.1} ({})",
                    item.name, item.calories, item.rating, item.review_count
                );
            }
        }
        None => println!("no menu stored for today"),
    }
}

/// Trimmed demo fixture: one student, one week of weekday menus around today,
/// three announcements. Stands in for the original yearly sample generator.
fn demo_seed() -> SeedData {
    let today = Local::now().date_naive();
    let mut menu_days = Vec::new();
    for offset in 0..7u64 {
        let date = today + Days::new(offset);
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        let mut soup = MenuItem::new("Mercimek Corbasi", MenuCategory::Soup, 120);
        soup.description = Some("Red lentil soup".to_string());
        soup.allergens = vec![Allergen::Gluten];
        let mut main = MenuItem::new("Izgara Tavuk", MenuCategory::Lunch, 300);
        main.description = Some("Grilled chicken".to_string());
        let mut dessert = MenuItem::new("Sutlac", MenuCategory::Dessert, 220);
        dessert.allergens = vec![Allergen::Dairy];
        menu_days.push(MenuDay::new(date, vec![soup, main, dessert]));
    }

    SeedData {
        students: vec![Student::new(
            "Campus Ogrenci",
            "ogrenci@campus.com",
            "123456",
            "2024001",
        )],
        menu_days,
        announcements: vec![
            Announcement::new(
                "Cafeteria app",
                "Daily menu and calorie tracking for campus students.",
                AnnouncementType::General,
            ),
            Announcement::new(
                "Weekly menu updated",
                "New dishes were added to this week's menu.",
                AnnouncementType::MenuChange,
            ),
            Announcement::new(
                "Healthy eating",
                "Remember to combine different food groups in every meal.",
                AnnouncementType::Event,
            ),
        ],
    }
}
