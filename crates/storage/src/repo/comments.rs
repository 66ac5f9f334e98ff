use crate::ConsoleStore;
use domain::{Account, Comment};

impl ConsoleStore {
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.comment_id == comment_id)
    }

    pub fn comment_author(&self, comment: &Comment) -> Option<&Account> {
        self.account(&comment.user_id)
    }

    pub fn remove_comment(&mut self, comment_id: &str) -> bool {
        match self.comments.iter().position(|c| c.comment_id == comment_id) {
            Some(idx) => {
                self.comments.remove(idx);
                true
            }
            None => false,
        }
    }
}
