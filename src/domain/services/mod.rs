//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **birthday_scheduler**: 誕生日の先読みと週末シフト
//! - **clock**: 「今日」を提供するポート

pub mod birthday_scheduler;
pub mod clock;
