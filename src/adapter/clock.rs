//! Clock Implementations
//!
//! Clockポートの実装（システム時計・固定日付）

use chrono::{Local, NaiveDate};

use crate::domain::services::clock::Clock;

/// ローカルのシステム時計
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 常に同じ日付を返す時計（`--today` 指定時やテスト用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
