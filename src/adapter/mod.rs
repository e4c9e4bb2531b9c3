//! Adapter Layer
//!
//! 外部システム（設定ファイル、システム時計、メモリ上のストア）との統合

pub mod clock;
pub mod config;
pub mod repositories;
