//! In-Memory Contact Repository Implementation
//!
//! ContactRepositoryのメモリ実装（プロセス終了で消える）

use log::debug;

use crate::domain::entities::contact::Contact;
use crate::domain::repositories::contact_repository::ContactRepository;

/// メモリ上の連絡先ディレクトリ
///
/// 追加順を保持するため `Vec` で保持する
#[derive(Debug, Default, Clone)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    /// 空のリポジトリを作成
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name() == name)
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn save(&mut self, contact: Contact) {
        match self.position(contact.name()) {
            Some(index) => {
                debug!("Replacing contact {} at position {}", contact.name(), index);
                self.contacts[index] = contact;
            }
            None => {
                debug!("Appending contact {}", contact.name());
                self.contacts.push(contact);
            }
        }
    }

    fn find(&self, name: &str) -> Option<Contact> {
        self.position(name).map(|index| self.contacts[index].clone())
    }

    fn delete(&mut self, name: &str) -> Option<Contact> {
        self.position(name).map(|index| self.contacts.remove(index))
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }
}
