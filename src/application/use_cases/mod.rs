//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ManageContactsUseCase**: 連絡先・電話番号・誕生日の登録と参照
//! - **UpcomingBirthdaysUseCase**: 今後1週間の誕生日レポート

pub mod manage_contacts;
pub mod upcoming_birthdays;
