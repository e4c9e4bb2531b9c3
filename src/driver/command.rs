//! Command Parsing
//!
//! 入力行をコマンドに変換

use thiserror::Error;

use crate::application::use_cases::manage_contacts::DirectoryError;

/// コマンド実行のエラー
///
/// どれも1行のメッセージとしてユーザーに表示される
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid command.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// ユーザーが入力したコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    EditPhone { name: String, old: String, new: String },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Help,
    Exit,
}

impl Command {
    /// 入力行をパースする
    ///
    /// 空行は `Ok(None)`。コマンド名は大文字小文字を区別しない。
    ///
    /// # Errors
    ///
    /// 未知のコマンド、または引数の数が合わない場合にエラーを返す
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.to_lowercase().as_str() {
            "hello" => expect_args::<0>(&args, "hello").map(|_| Self::Hello)?,
            "add" => {
                let [name, phone] = expect_args::<2>(&args, "add <name> <phone>")?;
                Self::Add { name, phone }
            }
            "change" => {
                let [name, phone] = expect_args::<2>(&args, "change <name> <phone>")?;
                Self::Change { name, phone }
            }
            "edit-phone" => {
                let [name, old, new] =
                    expect_args::<3>(&args, "edit-phone <name> <old> <new>")?;
                Self::EditPhone { name, old, new }
            }
            "phone" => {
                let [name] = expect_args::<1>(&args, "phone <name>")?;
                Self::Phone { name }
            }
            "remove-phone" => {
                let [name, phone] = expect_args::<2>(&args, "remove-phone <name> <phone>")?;
                Self::RemovePhone { name, phone }
            }
            "delete" => {
                let [name] = expect_args::<1>(&args, "delete <name>")?;
                Self::Delete { name }
            }
            "all" => expect_args::<0>(&args, "all").map(|_| Self::All)?,
            "add-birthday" => {
                let [name, birthday] =
                    expect_args::<2>(&args, "add-birthday <name> <DD.MM.YYYY>")?;
                Self::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = expect_args::<1>(&args, "show-birthday <name>")?;
                Self::ShowBirthday { name }
            }
            "birthdays" => expect_args::<0>(&args, "birthdays").map(|_| Self::Birthdays)?,
            "help" => expect_args::<0>(&args, "help").map(|_| Self::Help)?,
            "close" => expect_args::<0>(&args, "close").map(|_| Self::Exit)?,
            "exit" => expect_args::<0>(&args, "exit").map(|_| Self::Exit)?,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// 引数がちょうど `N` 個であることを確認する
fn expect_args<const N: usize>(
    args: &[&str],
    usage: &'static str,
) -> Result<[String; N], CommandError> {
    if args.len() != N {
        return Err(CommandError::Usage(usage));
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

/// `help` で表示するコマンド一覧
pub const HELP: &str = "\
Commands:
  hello
  add <name> <phone>
  change <name> <phone>
  edit-phone <name> <old> <new>
  phone <name>
  remove-phone <name> <phone>
  delete <name>
  all
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  birthdays
  help
  close | exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t"), Ok(None));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("HELLO"), Ok(Some(Command::Hello)));
        assert_eq!(Command::parse("  Exit  "), Ok(Some(Command::Exit)));
        assert_eq!(Command::parse("close"), Ok(Some(Command::Exit)));
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add John 1234567890"),
            Ok(Some(Command::Add {
                name: "John".to_string(),
                phone: "1234567890".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_keeps_argument_case() {
        assert_eq!(
            Command::parse("PHONE John"),
            Ok(Some(Command::Phone {
                name: "John".to_string()
            }))
        );
    }

    #[test]
    fn test_parse_edit_phone() {
        assert_eq!(
            Command::parse("edit-phone John 1111111111 2222222222"),
            Ok(Some(Command::EditPhone {
                name: "John".to_string(),
                old: "1111111111".to_string(),
                new: "2222222222".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_add_birthday() {
        assert_eq!(
            Command::parse("add-birthday John 14.11.1970"),
            Ok(Some(Command::AddBirthday {
                name: "John".to_string(),
                birthday: "14.11.1970".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_missing_arguments() {
        assert_eq!(
            Command::parse("add John"),
            Err(CommandError::Usage("add <name> <phone>"))
        );
        assert_eq!(
            Command::parse("show-birthday"),
            Err(CommandError::Usage("show-birthday <name>"))
        );
    }

    #[test]
    fn test_parse_extra_arguments() {
        assert!(matches!(
            Command::parse("birthdays now"),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            Command::parse("add John 1234567890 extra"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_exit_and_help_take_no_arguments() {
        assert_eq!(Command::parse("close"), Ok(Some(Command::Exit)));
        assert_eq!(Command::parse("EXIT"), Ok(Some(Command::Exit)));
        assert_eq!(Command::parse("help me"), Err(CommandError::Usage("help")));
        assert_eq!(Command::parse("exit now"), Err(CommandError::Usage("exit")));
        assert_eq!(Command::parse("close all"), Err(CommandError::Usage("close")));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("fly away").unwrap_err();

        assert_eq!(err, CommandError::Unknown("fly".to_string()));
        assert_eq!(err.to_string(), "Invalid command.");
    }

    #[test]
    fn test_usage_message() {
        assert_eq!(
            CommandError::Usage("phone <name>").to_string(),
            "Usage: phone <name>"
        );
    }
}
