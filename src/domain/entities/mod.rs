//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Contact**: 連絡先（名前・電話番号・誕生日）
//! - **BirthDate**: 誕生日のバリューオブジェクト
//! - **Phone**: 電話番号のバリューオブジェクト
//! - **WeeklyReport**: 曜日ごとのお祝いリスト

pub mod birth_date;
pub mod contact;
pub mod phone;
pub mod weekly_report;
