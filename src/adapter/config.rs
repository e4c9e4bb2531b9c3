//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::services::birthday_scheduler::LOOKAHEAD_DAYS;

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/contact-assistant/config.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// 入力プロンプト
    pub prompt: String,
    /// 起動時のあいさつ
    pub greeting: String,
    /// 誕生日の先読み日数
    pub lookahead_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "Enter a command: ".to_string(),
            greeting: "Welcome to the assistant bot!".to_string(),
            lookahead_days: LOOKAHEAD_DAYS,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// 存在しないキーはデフォルト値になる
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// 設定ファイルを読み込む（ファイルがなければデフォルト）
    ///
    /// `~` はホームディレクトリに展開する
    pub fn load_or_default(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);

        if !Path::new(expanded.as_ref()).exists() {
            info!("No config file at {}, using defaults", expanded);
            return Ok(Self::default());
        }

        let config = Self::load(expanded.as_ref())?;
        info!("Loaded config from {}", expanded);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.lookahead_days == 0 {
            bail!("lookahead_days must be at least 1");
        }
        Ok(())
    }
}
