//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - フレームワークに依存しない
//! - 入出力について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Contact, BirthDate, WeeklyReportなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（誕生日スケジューリング、Clock）

pub mod entities;
pub mod repositories;
pub mod services;
