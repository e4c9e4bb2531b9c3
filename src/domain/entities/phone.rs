//! # Phone Value Object
//!
//! 電話番号のバリューオブジェクト

use std::fmt;
use thiserror::Error;

/// 電話番号の桁数
pub const PHONE_DIGITS: usize = 10;

/// 電話番号のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Phone number '{0}' must contain exactly 10 digits.")]
pub struct PhoneError(pub String);

/// 電話番号（ちょうど10桁の数字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    /// 文字列から電話番号を作成
    ///
    /// # Errors
    ///
    /// 10桁の数字でない場合にエラーを返す
    pub fn parse(value: &str) -> Result<Self, PhoneError> {
        if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhoneError(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_phone() {
        let phone = Phone::parse("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_parse_too_short() {
        assert_eq!(
            Phone::parse("12345"),
            Err(PhoneError("12345".to_string()))
        );
    }

    #[test]
    fn test_parse_too_long() {
        assert!(Phone::parse("123456789012").is_err());
    }

    #[test]
    fn test_parse_non_digits() {
        assert!(Phone::parse("12345abcde").is_err());
        assert!(Phone::parse("+380501234").is_err());
    }

    #[test]
    fn test_display() {
        let phone = Phone::parse("0987654321").unwrap();
        assert_eq!(phone.to_string(), "Phone: 0987654321");
    }
}
