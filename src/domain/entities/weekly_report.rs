//! # WeeklyReport Entity
//!
//! 今後1週間に祝うべき連絡先を曜日ごとにまとめたレポート

use chrono::{Datelike, NaiveDate, Weekday};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// 月曜日から日曜日までの固定順序
pub const WEEK_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// 曜日の英語名（"Monday" など）
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// 今後の誕生日エントリ
///
/// 保存されることはなく、レポート生成のたびに再計算される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// 今年（または来年）の実際の誕生日
    pub occurrence: NaiveDate,
    /// お祝いする日（週末なら翌月曜日）
    pub greeting: NaiveDate,
}

impl UpcomingBirthday {
    /// 実際の誕生日の曜日（週末シフト前）
    pub fn birthday_weekday(&self) -> Weekday {
        self.occurrence.weekday()
    }

    /// レポート上のバケット（お祝いする日の曜日）
    pub fn greeting_weekday(&self) -> Weekday {
        self.greeting.weekday()
    }

    pub fn is_shifted(&self) -> bool {
        self.occurrence != self.greeting
    }
}

/// 曜日ごとのお祝いリスト
///
/// 曜日は常に月曜日→日曜日の順で列挙され、各曜日内の名前は追加された順を保持する。
/// 名前のない曜日は列挙されない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyReport {
    buckets: [Vec<String>; 7],
}

impl WeeklyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリのリストからレポートを組み立てる
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a UpcomingBirthday>,
    {
        let mut report = Self::new();
        for entry in entries {
            report.push(entry.greeting_weekday(), entry.name.clone());
        }
        report
    }

    pub fn push(&mut self, weekday: Weekday, name: String) {
        self.buckets[weekday.num_days_from_monday() as usize].push(name);
    }

    /// 指定した曜日の名前リスト
    pub fn names_on(&self, weekday: Weekday) -> &[String] {
        &self.buckets[weekday.num_days_from_monday() as usize]
    }

    /// 空でない曜日を月曜日から順に列挙
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[String])> + '_ {
        WEEK_ORDER
            .into_iter()
            .map(move |day| (day, self.names_on(day)))
            .filter(|(_, names)| !names.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// 表示用の複数行テキスト（`"<Day>: <name1>, <name2>\n"`）
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeeklyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (day, names) in self.days() {
            writeln!(f, "{}: {}", day_name(day), names.join(", "))?;
        }
        Ok(())
    }
}

/// `{"Monday": [...], "Wednesday": [...]}` の形で曜日順にシリアライズ
impl Serialize for WeeklyReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.days().count()))?;
        for (day, names) in self.days() {
            map.serialize_entry(day_name(day), names)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(Weekday::Mon), "Monday");
        assert_eq!(day_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        let report = WeeklyReport::new();

        assert!(report.is_empty());
        assert_eq!(report.render(), "");
        assert_eq!(report.days().count(), 0);
    }

    #[test]
    fn test_days_in_week_order() {
        let mut report = WeeklyReport::new();
        report.push(Weekday::Fri, "Finn".to_string());
        report.push(Weekday::Wed, "Eve".to_string());
        report.push(Weekday::Mon, "Anna".to_string());

        let days: Vec<Weekday> = report.days().map(|(day, _)| day).collect();

        assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        assert_eq!(report.render(), "Monday: Anna\nWednesday: Eve\nFriday: Finn\n");
    }

    #[test]
    fn test_weekend_slots_sort_last() {
        let mut report = WeeklyReport::new();
        report.push(Weekday::Sun, "Sam".to_string());
        report.push(Weekday::Sat, "Sue".to_string());
        report.push(Weekday::Tue, "Tom".to_string());

        assert_eq!(report.render(), "Tuesday: Tom\nSaturday: Sue\nSunday: Sam\n");
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let mut report = WeeklyReport::new();
        report.push(Weekday::Thu, "Zoe".to_string());
        report.push(Weekday::Thu, "Adam".to_string());

        assert_eq!(report.names_on(Weekday::Thu), ["Zoe", "Adam"]);
        assert_eq!(report.render(), "Thursday: Zoe, Adam\n");
    }

    #[test]
    fn test_from_entries_uses_greeting_day() {
        let entries = vec![UpcomingBirthday {
            name: "Bob".to_string(),
            occurrence: date(2024, 5, 18),
            greeting: date(2024, 5, 20),
        }];

        let report = WeeklyReport::from_entries(&entries);

        assert_eq!(report.names_on(Weekday::Mon), ["Bob"]);
        assert!(report.names_on(Weekday::Sat).is_empty());
    }

    #[test]
    fn test_entry_weekdays() {
        let entry = UpcomingBirthday {
            name: "Bob".to_string(),
            occurrence: date(2024, 5, 18),
            greeting: date(2024, 5, 20),
        };

        assert_eq!(entry.birthday_weekday(), Weekday::Sat);
        assert_eq!(entry.greeting_weekday(), Weekday::Mon);
        assert!(entry.is_shifted());
    }

    #[test]
    fn test_serialize_in_week_order() {
        let mut report = WeeklyReport::new();
        report.push(Weekday::Fri, "Finn".to_string());
        report.push(Weekday::Mon, "Anna".to_string());
        report.push(Weekday::Mon, "Bob".to_string());

        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(json, r#"{"Monday":["Anna","Bob"],"Friday":["Finn"]}"#);
    }
}
