//! # Upcoming Birthdays Use Case
//!
//! 今後1週間の誕生日レポート作成ユースケース

use chrono::NaiveDate;
use log::info;

use crate::domain::entities::weekly_report::WeeklyReport;
use crate::domain::repositories::contact_repository::ContactRepository;
use crate::domain::services::birthday_scheduler::BirthdayScheduler;

/// 誕生日レポートユースケース
///
/// リポジトリを読み取るだけで、状態は一切変更しない
pub struct UpcomingBirthdaysUseCase<'a, R: ContactRepository> {
    repository: &'a R,
    scheduler: BirthdayScheduler,
}

impl<'a, R: ContactRepository> UpcomingBirthdaysUseCase<'a, R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `repository` - 連絡先リポジトリ
    /// * `scheduler` - 誕生日スケジューラ
    pub fn new(repository: &'a R, scheduler: BirthdayScheduler) -> Self {
        Self {
            repository,
            scheduler,
        }
    }

    /// レポートを作成する
    ///
    /// # Arguments
    ///
    /// * `today` - 基準日
    pub fn execute(&self, today: NaiveDate) -> WeeklyReport {
        let contacts = self.repository.list();
        let report = self.scheduler.weekly_report(&contacts, today);

        info!(
            "Scheduled {} of {} contacts for the week starting {}",
            report.days().map(|(_, names)| names.len()).sum::<usize>(),
            contacts.len(),
            today
        );

        report
    }
}
