use crate::ConsoleStore;
use domain::Account;

impl ConsoleStore {
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, user_id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.user_id == user_id)
    }

    pub fn patch_account_ban(&mut self, user_id: &str, banned: bool) -> bool {
        match self.accounts.iter_mut().find(|a| a.user_id == user_id) {
            Some(account) => {
                account.is_banned = banned;
                true
            }
            None => false,
        }
    }
}
