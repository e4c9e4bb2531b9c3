//! Command Dispatcher
//!
//! コマンドをユースケースに振り分けて、表示する返答を作る

use chrono::NaiveDate;

use crate::application::use_cases::manage_contacts::{AddOutcome, ManageContactsUseCase};
use crate::application::use_cases::upcoming_birthdays::UpcomingBirthdaysUseCase;
use crate::domain::repositories::contact_repository::ContactRepository;
use crate::domain::services::birthday_scheduler::BirthdayScheduler;

use super::command::{Command, CommandError, HELP};

/// コマンドの返答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 表示して次のコマンドを待つ
    Continue(String),
    /// 表示して終了する
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// コマンドディスパッチャ
///
/// グローバルな状態は持たず、ストアは呼び出しごとに借用する
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    scheduler: BirthdayScheduler,
}

impl Dispatcher {
    pub fn new(scheduler: BirthdayScheduler) -> Self {
        Self { scheduler }
    }

    /// コマンドを実行する
    ///
    /// # Arguments
    ///
    /// * `command` - 実行するコマンド
    /// * `store` - 連絡先ストア
    /// * `today` - 誕生日レポートの基準日
    ///
    /// # Errors
    ///
    /// 連絡先が存在しない、入力値が不正などの場合にエラーを返す（ストアは変更されない）
    pub fn dispatch<R: ContactRepository>(
        &self,
        command: &Command,
        store: &mut R,
        today: NaiveDate,
    ) -> Result<Reply, CommandError> {
        let text = match command {
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Hello => "How can I help you?".to_string(),
            Command::Help => HELP.to_string(),
            Command::Add { name, phone } => {
                match ManageContactsUseCase::new(store).add_contact(name, phone)? {
                    AddOutcome::Created => "Contact added.".to_string(),
                    AddOutcome::PhoneAdded => "Phone added.".to_string(),
                }
            }
            Command::Change { name, phone } => {
                ManageContactsUseCase::new(store).change_phone(name, phone)?;
                "Contact updated.".to_string()
            }
            Command::EditPhone { name, old, new } => {
                ManageContactsUseCase::new(store).edit_phone(name, old, new)?;
                "Phone updated.".to_string()
            }
            Command::Phone { name } => {
                let phones = ManageContactsUseCase::new(store).phones(name)?;
                if phones.is_empty() {
                    format!("{} has no phone numbers.", name)
                } else {
                    phones
                        .iter()
                        .map(|p| p.to_string())
                        .collect::<Vec<_>>()
                        .join("; ")
                }
            }
            Command::RemovePhone { name, phone } => {
                ManageContactsUseCase::new(store).remove_phone(name, phone)?;
                "Phone removed.".to_string()
            }
            Command::Delete { name } => {
                ManageContactsUseCase::new(store).delete(name)?;
                "Contact deleted.".to_string()
            }
            Command::All => {
                let contacts = ManageContactsUseCase::new(store).list();
                if contacts.is_empty() {
                    "No contacts.".to_string()
                } else {
                    contacts
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::AddBirthday { name, birthday } => {
                ManageContactsUseCase::new(store).add_birthday(name, birthday)?;
                "Birthday added.".to_string()
            }
            Command::ShowBirthday { name } => {
                match ManageContactsUseCase::new(store).birthday(name)? {
                    Some(birthday) => format!("{}'s birthday: {}", name, birthday),
                    None => format!("{} has no birthday set.", name),
                }
            }
            Command::Birthdays => {
                let report =
                    UpcomingBirthdaysUseCase::new(&*store, self.scheduler).execute(today);
                if report.is_empty() {
                    "No birthdays in the upcoming week.".to_string()
                } else {
                    report.render().trim_end().to_string()
                }
            }
        };

        Ok(Reply::Continue(text))
    }
}
