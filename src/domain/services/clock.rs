//! # Clock Port
//!
//! 「今日」の日付を提供するポート

use chrono::NaiveDate;

/// 今日の日付を返すポート
///
/// スケジューラはシステム時刻に直接依存せず、呼び出し側がこのポートから
/// 取得した日付を引数として渡す。
pub trait Clock {
    fn today(&self) -> NaiveDate;
}
