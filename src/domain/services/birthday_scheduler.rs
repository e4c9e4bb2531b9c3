//! # Birthday Scheduler Service
//!
//! 今後1週間の誕生日を計算するドメインサービス

use chrono::{Datelike, Days, NaiveDate, Weekday};
use log::debug;

use crate::domain::entities::birth_date::BirthDate;
use crate::domain::entities::contact::Contact;
use crate::domain::entities::weekly_report::{UpcomingBirthday, WeeklyReport};

/// 先読みする日数（今日を含む）
pub const LOOKAHEAD_DAYS: u32 = 7;

/// 次の誕生日を計算する
///
/// 今年の誕生日が今日より前なら来年の誕生日を返す。
/// 戻り値は常に `today` 以降。
pub fn next_occurrence(birthday: BirthDate, today: NaiveDate) -> NaiveDate {
    let this_year = birthday.in_year(today.year());
    if this_year < today {
        birthday.in_year(today.year() + 1)
    } else {
        this_year
    }
}

/// お祝いする日を計算する
///
/// 土曜日は +2日、日曜日は +1日して翌週の月曜日にずらす。
/// 日数の加算なので月末・年末をまたいでも有効な日付になる。
pub fn greeting_date(occurrence: NaiveDate) -> NaiveDate {
    let shift = match occurrence.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    occurrence
        .checked_add_days(Days::new(shift))
        .unwrap_or(occurrence)
}

/// 誕生日スケジューラ
///
/// 連絡先のスナップショットと「今日」から、お祝いする連絡先を曜日ごとにまとめる。
/// 状態を持たないため、同じ入力に対して常に同じ結果を返す。
#[derive(Debug, Clone, Copy)]
pub struct BirthdayScheduler {
    lookahead_days: u32,
}

impl BirthdayScheduler {
    /// 新しいスケジューラを作成
    ///
    /// # Arguments
    ///
    /// * `lookahead_days` - 今日を含めて何日先まで対象にするか
    pub fn new(lookahead_days: u32) -> Self {
        Self { lookahead_days }
    }

    pub fn lookahead_days(&self) -> u32 {
        self.lookahead_days
    }

    /// 先読み期間内に誕生日がある連絡先を列挙する
    ///
    /// 誕生日が未設定の連絡先は黙ってスキップする。
    /// 結果の順序は `contacts` の順序を保持する。
    ///
    /// # Arguments
    ///
    /// * `contacts` - 連絡先のスナップショット
    /// * `today` - 基準日
    pub fn upcoming(&self, contacts: &[Contact], today: NaiveDate) -> Vec<UpcomingBirthday> {
        contacts
            .iter()
            .filter_map(|contact| {
                let birthday = contact.birthday()?;
                let occurrence = next_occurrence(birthday, today);
                let days_ahead = (occurrence - today).num_days();

                if !(0..i64::from(self.lookahead_days)).contains(&days_ahead) {
                    return None;
                }

                let entry = UpcomingBirthday {
                    name: contact.name().to_string(),
                    occurrence,
                    greeting: greeting_date(occurrence),
                };
                if entry.is_shifted() {
                    debug!(
                        "{}: birthday {} ({:?}) in {} days, moved to {}",
                        entry.name,
                        occurrence,
                        entry.birthday_weekday(),
                        days_ahead,
                        entry.greeting
                    );
                } else {
                    debug!("{}: birthday {} in {} days", entry.name, occurrence, days_ahead);
                }

                Some(entry)
            })
            .collect()
    }

    /// 曜日ごとのレポートを作成する
    pub fn weekly_report(&self, contacts: &[Contact], today: NaiveDate) -> WeeklyReport {
        WeeklyReport::from_entries(&self.upcoming(contacts, today))
    }
}

impl Default for BirthdayScheduler {
    fn default() -> Self {
        Self::new(LOOKAHEAD_DAYS)
    }
}
