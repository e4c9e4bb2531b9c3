//! # Contact Assistant
//!
//! 誕生日リマインダー付きの対話型アドレス帳
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 連絡先・誕生日・週次レポートと誕生日スケジューリング（入出力なし）
//! - **Application層**: アプリケーション固有のビジネスフロー（ユースケース）
//! - **Adapter層**: 設定ファイル、システム時計、メモリ上のストア
//! - **Driver層**: CLI、コマンドのパースと実行ループ、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
