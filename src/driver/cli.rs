//! CLI Argument Parsing
//!
//! CLIの引数解析

use chrono::NaiveDate;
use clap::Parser;

use crate::adapter::config::DEFAULT_CONFIG_PATH;
use crate::domain::entities::birth_date::parse_date;

/// 誕生日リマインダー付きの連絡先アシスタント
#[derive(Parser, Debug, Clone)]
#[command(name = "contact-assistant")]
#[command(about = "Interactive contact book with upcoming-birthday reminders", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Use this date (DD.MM.YYYY) as "today" instead of the system clock
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["contact-assistant"]);
        assert_eq!(args.config, "~/.config/contact-assistant/config.json");
        assert!(args.today.is_none());
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["contact-assistant", "-c", "/custom/config.json"]);
        assert_eq!(args.config, "/custom/config.json");
    }

    #[test]
    fn test_args_today() {
        let args = Args::parse_from(["contact-assistant", "--today", "15.05.2024"]);
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 5, 15));
    }

    #[test]
    fn test_args_invalid_today() {
        let result = Args::try_parse_from(["contact-assistant", "--today", "2024-05-15"]);
        assert!(result.is_err());
    }
}
