use adapter::Console;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub console: Arc<Console>,
    pub admin_token: String,
    // 初次加载失败时的错误信息
    pub load_error: Arc<RwLock<Option<String>>>,
}
