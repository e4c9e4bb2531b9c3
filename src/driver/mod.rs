//! # Driver Layer (Presentation)
//!
//! 対話型のコマンドインタプリタを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **command**: 入力行のコマンドへの変換
//! - **dispatcher**: コマンドの実行
//! - **workflow**: 読み取り・実行・表示のループ

pub mod cli;
pub mod command;
pub mod dispatcher;
pub mod workflow;

pub use cli::Args;
pub use command::{Command, CommandError};
pub use dispatcher::{Dispatcher, Reply};
pub use workflow::AssistantWorkflow;
