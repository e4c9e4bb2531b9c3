//! # Contact Repository Trait
//!
//! 連絡先ディレクトリの保存を抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::contact::Contact;

/// 連絡先リポジトリ
///
/// 名前をキーとした連絡先の保存を担当するリポジトリ。
/// 列挙順は連絡先が最初に追加された順。
#[cfg_attr(test, automock)]
pub trait ContactRepository {
    /// 連絡先を保存する
    ///
    /// 同じ名前の連絡先が既にあれば、元の位置のまま置き換える
    fn save(&mut self, contact: Contact);

    /// 名前で連絡先を検索する
    fn find(&self, name: &str) -> Option<Contact>;

    /// 連絡先を削除する
    ///
    /// # Returns
    ///
    /// 削除された連絡先（存在しなければ `None`）
    fn delete(&mut self, name: &str) -> Option<Contact>;

    /// 全ての連絡先を追加順に返す
    fn list(&self) -> Vec<Contact>;
}
