//! # Contact Entity
//!
//! 連絡先のドメインエンティティ

use std::fmt;
use thiserror::Error;

use super::birth_date::BirthDate;
use super::phone::Phone;

/// 連絡先の操作エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Phone number {phone} not found for {name}.")]
    PhoneNotFound { name: String, phone: String },

    #[error("{name} already has phone number {phone}.")]
    DuplicatePhone { name: String, phone: String },

    #[error("{0} has no phone numbers.")]
    NoPhones(String),

    #[error("Birthday for {name} is already set to {birthday}.")]
    BirthdayAlreadySet { name: String, birthday: BirthDate },
}

/// 連絡先
///
/// 名前（ディレクトリのキー）、電話番号のリスト、任意の誕生日を持つ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<BirthDate>,
}

impl Contact {
    /// 電話番号も誕生日も持たない連絡先を作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// 誕生日付きの連絡先を作成
    pub fn with_birthday(name: impl Into<String>, birthday: BirthDate) -> Self {
        Self {
            birthday: Some(birthday),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<BirthDate> {
        self.birthday
    }

    /// 電話番号を追加
    ///
    /// # Errors
    ///
    /// 同じ番号が既に登録されている場合にエラーを返す
    pub fn add_phone(&mut self, phone: Phone) -> Result<(), ContactError> {
        self.ensure_unique(&phone, None)?;
        self.phones.push(phone);
        Ok(())
    }

    /// 電話番号を削除
    pub fn remove_phone(&mut self, phone: &str) -> Result<Phone, ContactError> {
        let index = self.position_of(phone)?;
        Ok(self.phones.remove(index))
    }

    /// 電話番号を置き換える（位置は維持）
    ///
    /// # Errors
    ///
    /// `old` が見つからない場合、`new` が他の番号と重複する場合にエラーを返す
    pub fn edit_phone(&mut self, old: &str, new: Phone) -> Result<(), ContactError> {
        let index = self.position_of(old)?;
        self.ensure_unique(&new, Some(index))?;
        self.phones[index] = new;
        Ok(())
    }

    /// 最初の電話番号を置き換える
    pub fn replace_primary_phone(&mut self, new: Phone) -> Result<(), ContactError> {
        if self.phones.is_empty() {
            return Err(ContactError::NoPhones(self.name.clone()));
        }
        self.ensure_unique(&new, Some(0))?;
        self.phones[0] = new;
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// 誕生日を設定する
    ///
    /// 誕生日は一度だけ設定でき、上書きはできない
    pub fn set_birthday(&mut self, birthday: BirthDate) -> Result<(), ContactError> {
        if let Some(existing) = self.birthday {
            return Err(ContactError::BirthdayAlreadySet {
                name: self.name.clone(),
                birthday: existing,
            });
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// `skip` の位置以外に同じ番号がないことを確認する
    fn ensure_unique(&self, phone: &Phone, skip: Option<usize>) -> Result<(), ContactError> {
        let duplicate = self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| Some(i) != skip && p == phone);
        if duplicate {
            return Err(ContactError::DuplicatePhone {
                name: self.name.clone(),
                phone: phone.as_str().to_string(),
            });
        }
        Ok(())
    }

    fn position_of(&self, phone: &str) -> Result<usize, ContactError> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| ContactError::PhoneNotFound {
                name: self.name.clone(),
                phone: phone.to_string(),
            })
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}", self.name)?;
        if !phones.is_empty() {
            write!(f, ", {}", phones)?;
        }
        if let Some(birthday) = self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
