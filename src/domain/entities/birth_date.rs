//! # BirthDate Value Object
//!
//! 誕生日のバリューオブジェクト（`DD.MM.YYYY` 形式）

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// 境界で使用する日付フォーマット
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// 誕生日のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthDateError {
    #[error("Incorrect date format '{0}', should be DD.MM.YYYY")]
    Format(String),

    #[error("'{0}' is not a valid calendar date")]
    InvalidDate(String),
}

/// 誕生日
///
/// 時刻やタイムゾーンを持たない暦日。一度連絡先に設定されたら変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// `DD.MM.YYYY` 形式の文字列から誕生日を作成
    ///
    /// # Errors
    ///
    /// ゼロ埋めされた `DD.MM.YYYY` でない場合、または存在しない日付の場合にエラーを返す
    pub fn parse(value: &str) -> Result<Self, BirthDateError> {
        parse_date(value).map(Self)
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// 指定した年における誕生日の日付
    ///
    /// 閏年でない年の 2月29日生まれは 2月28日として扱う
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

/// `DD.MM.YYYY` 形式の文字列を暦日としてパースする
pub fn parse_date(value: &str) -> Result<NaiveDate, BirthDateError> {
    if !has_date_shape(value) {
        return Err(BirthDateError::Format(value.to_string()));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| BirthDateError::InvalidDate(value.to_string()))
}

/// `DD.MM.YYYY`: 数字2桁・ピリオド・数字2桁・ピリオド・数字4桁
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
