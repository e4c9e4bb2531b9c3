//! # Manage Contacts Use Case
//!
//! 連絡先の登録・更新・削除・参照ユースケース

use log::info;
use thiserror::Error;

use crate::domain::entities::birth_date::{BirthDate, BirthDateError};
use crate::domain::entities::contact::{Contact, ContactError};
use crate::domain::entities::phone::{Phone, PhoneError};
use crate::domain::repositories::contact_repository::ContactRepository;

/// ディレクトリ操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Contact {0} not found.")]
    NotFound(String),

    #[error(transparent)]
    Phone(#[from] PhoneError),

    #[error(transparent)]
    BirthDate(#[from] BirthDateError),

    #[error(transparent)]
    Contact(#[from] ContactError),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// `add` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// 新しい連絡先を作成した
    Created,
    /// 既存の連絡先に電話番号を追加した
    PhoneAdded,
}

/// 連絡先管理ユースケース
///
/// 入力値のバリデーションはリポジトリを変更する前に行う
pub struct ManageContactsUseCase<'a, R: ContactRepository> {
    repository: &'a mut R,
}

impl<'a, R: ContactRepository> ManageContactsUseCase<'a, R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `repository` - 連絡先リポジトリ
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// 連絡先を追加する
    ///
    /// 同じ名前の連絡先があれば、その連絡先に電話番号を追加する
    ///
    /// # Errors
    ///
    /// 電話番号が不正、または既に登録済みの場合にエラーを返す
    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<AddOutcome> {
        let phone = Phone::parse(phone)?;

        let (mut contact, outcome) = match self.repository.find(name) {
            Some(existing) => (existing, AddOutcome::PhoneAdded),
            None => (Contact::new(name), AddOutcome::Created),
        };
        contact.add_phone(phone)?;
        self.repository.save(contact);

        info!("Saved contact {} ({:?})", name, outcome);
        Ok(outcome)
    }

    /// 最初の電話番号を変更する
    pub fn change_phone(&mut self, name: &str, phone: &str) -> Result<()> {
        let phone = Phone::parse(phone)?;
        let mut contact = self.find(name)?;
        contact.replace_primary_phone(phone)?;
        self.repository.save(contact);

        info!("Changed primary phone of {}", name);
        Ok(())
    }

    /// 特定の電話番号を変更する
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<()> {
        let new = Phone::parse(new)?;
        let mut contact = self.find(name)?;
        contact.edit_phone(old, new)?;
        self.repository.save(contact);

        info!("Edited phone {} of {}", old, name);
        Ok(())
    }

    /// 電話番号を削除する
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<Phone> {
        let mut contact = self.find(name)?;
        let removed = contact.remove_phone(phone)?;
        self.repository.save(contact);

        info!("Removed phone {} from {}", phone, name);
        Ok(removed)
    }

    /// 連絡先の電話番号一覧
    pub fn phones(&self, name: &str) -> Result<Vec<Phone>> {
        Ok(self.find(name)?.phones().to_vec())
    }

    /// 連絡先を削除する
    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        let deleted = self
            .repository
            .delete(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;

        info!("Deleted contact {}", name);
        Ok(deleted)
    }

    /// 全ての連絡先（追加順）
    pub fn list(&self) -> Vec<Contact> {
        self.repository.list()
    }

    /// 誕生日を設定する
    ///
    /// # Errors
    ///
    /// 日付が `DD.MM.YYYY` でない場合、連絡先が存在しない場合、
    /// または誕生日が既に設定されている場合にエラーを返す
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<BirthDate> {
        let birthday = BirthDate::parse(birthday)?;
        let mut contact = self.find(name)?;
        contact.set_birthday(birthday)?;
        self.repository.save(contact);

        info!("Set birthday of {} to {}", name, birthday);
        Ok(birthday)
    }

    /// 誕生日を参照する（未設定なら `None`）
    pub fn birthday(&self, name: &str) -> Result<Option<BirthDate>> {
        Ok(self.find(name)?.birthday())
    }

    fn find(&self, name: &str) -> Result<Contact> {
        self.repository
            .find(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))
    }
}
