//! Birthday report integration tests
//!
//! 公開APIを通して週次レポートのシナリオを検証する

use chrono::{NaiveDate, Weekday};
use contact_assistant::adapter::repositories::in_memory_contact_repository::InMemoryContactRepository;
use contact_assistant::application::use_cases::manage_contacts::ManageContactsUseCase;
use contact_assistant::application::use_cases::upcoming_birthdays::UpcomingBirthdaysUseCase;
use contact_assistant::domain::entities::weekly_report::WeeklyReport;
use contact_assistant::domain::services::birthday_scheduler::BirthdayScheduler;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn directory(entries: &[(&str, Option<&str>)]) -> InMemoryContactRepository {
    let mut store = InMemoryContactRepository::new();
    let mut contacts = ManageContactsUseCase::new(&mut store);
    for (name, birthday) in entries {
        contacts.add_contact(name, "1234567890").unwrap();
        if let Some(birthday) = birthday {
            contacts.add_birthday(name, birthday).unwrap();
        }
    }
    store
}

fn report(store: &InMemoryContactRepository, today: NaiveDate) -> WeeklyReport {
    UpcomingBirthdaysUseCase::new(store, BirthdayScheduler::default()).execute(today)
}

#[test]
fn test_scenarios_on_a_wednesday() {
    let store = directory(&[
        ("Anna", Some("20.05.2024")),
        ("Bob", Some("18.05.2024")),
        ("Carl", Some("25.05.2024")),
        ("Dina", None),
        ("Eve", Some("16.05.1990")),
        ("Finn", Some("16.05.1985")),
    ]);

    let report = report(&store, date(2024, 5, 15));

    assert_eq!(report.names_on(Weekday::Mon), ["Anna", "Bob"]);
    assert_eq!(report.names_on(Weekday::Thu), ["Eve", "Finn"]);
    assert!(report.names_on(Weekday::Sat).is_empty());
    assert_eq!(report.render(), "Monday: Anna, Bob\nThursday: Eve, Finn\n");
}

#[test]
fn test_contact_without_birthday_never_reported() {
    let store = directory(&[("Dina", None)]);

    let mut today = date(2024, 1, 1);
    while today <= date(2024, 12, 31) {
        assert!(report(&store, today).is_empty());
        today = today.succ_opt().unwrap();
    }
}

#[test]
fn test_report_across_new_year() {
    let store = directory(&[("Kate", Some("31.12.1999")), ("Ivan", Some("02.01.1990"))]);

    // 2022-12-28 は水曜日。12/31 は土曜日なので 1/2 の月曜日にお祝い
    let report = report(&store, date(2022, 12, 28));

    assert_eq!(report.render(), "Monday: Kate, Ivan\n");
}

#[test]
fn test_report_json() {
    let store = directory(&[("Finn", Some("17.05.1990")), ("Anna", Some("20.05.1990"))]);

    let report = report(&store, date(2024, 5, 15));
    let json = serde_json::to_string(&report).unwrap();

    assert_eq!(json, r#"{"Monday":["Anna"],"Friday":["Finn"]}"#);
}
