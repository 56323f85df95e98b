//! Server state shared by the handlers.

use crate::usecase::SessionHandle;

/// Shared application state
pub struct AppState {
    /// セッションアクターへの入口
    pub session: SessionHandle,
}
