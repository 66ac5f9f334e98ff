use domain::{BanStatus, ConsoleEvent, ModerationCommand, ModerationError};
use tracing::{error, info};

use crate::console::Console;

pub const DELETE_COMMENT_PROMPT: &str = "Are you sure you want to delete this comment?";

pub trait ConfirmationGate {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

// 请求里已经带上的确认标记
impl ConfirmationGate for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationOutcome {
    Applied,
    Declined,
}

impl Console {
    pub async fn toggle_ban(
        &self,
        user_id: &str,
        is_currently_banned: bool,
    ) -> Result<BanStatus, ModerationError> {
        if let Some(account) = self.store.read().await.account(user_id) {
            if account.is_admin {
                return Err(ModerationError::ProtectedAccount(user_id.to_string()));
            }
        }

        let status = BanStatus::toggled_from(is_currently_banned);
        if let Err(e) = self.gateway.set_ban_status(user_id, status).await {
            error!("Failed to toggle ban: {}", e);
            return Err(e.into());
        }

        let patched = self
            .store
            .write()
            .await
            .patch_account_ban(user_id, status.is_banned());
        info!("Account {} is now {}", user_id, status);
        if patched {
            self.publish(ConsoleEvent::AccountBanChanged {
                user_id: user_id.to_string(),
                is_banned: status.is_banned(),
            });
        }
        Ok(status)
    }

    // 按 store 中当前的封禁状态生成切换命令
    pub async fn toggle_ban_command(
        &self,
        user_id: &str,
    ) -> Result<ModerationCommand, ModerationError> {
        let is_currently_banned = self
            .store
            .read()
            .await
            .account(user_id)
            .map(|a| a.is_banned)
            .ok_or_else(|| ModerationError::UnknownAccount(user_id.to_string()))?;
        Ok(ModerationCommand::ToggleBan {
            user_id: user_id.to_string(),
            is_currently_banned,
        })
    }

    pub async fn delete_comment<G>(
        &self,
        watchlist_id: &str,
        comment_id: &str,
        gate: &G,
    ) -> Result<ModerationOutcome, ModerationError>
    where
        G: ConfirmationGate + ?Sized,
    {
        if !gate.confirm(DELETE_COMMENT_PROMPT) {
            info!("Deletion of comment {} declined by operator", comment_id);
            return Ok(ModerationOutcome::Declined);
        }

        if let Err(e) = self.gateway.delete_comment(watchlist_id, comment_id).await {
            error!("Failed to delete comment: {}", e);
            return Err(e.into());
        }

        let removed = self.store.write().await.remove_comment(comment_id);
        info!("Comment {} deleted from watchlist {}", comment_id, watchlist_id);
        if removed {
            self.publish(ConsoleEvent::CommentRemoved {
                comment_id: comment_id.to_string(),
            });
        }
        Ok(ModerationOutcome::Applied)
    }

    pub async fn execute<G>(
        &self,
        cmd: ModerationCommand,
        gate: &G,
    ) -> Result<ModerationOutcome, ModerationError>
    where
        G: ConfirmationGate + ?Sized,
    {
        match cmd {
            ModerationCommand::ToggleBan {
                user_id,
                is_currently_banned,
            } => self
                .toggle_ban(&user_id, is_currently_banned)
                .await
                .map(|_| ModerationOutcome::Applied),
            ModerationCommand::DeleteComment {
                watchlist_id,
                comment_id,
            } => self.delete_comment(&watchlist_id, &comment_id, gate).await,
        }
    }
}
