use std::sync::Arc;

use crate::config::ServerConfig;

/// Handler state. The pool is handed to every repository call.
#[derive(Clone)]
pub struct AppState {
    pub pool: cms_db::DbPool,
    pub config: Arc<ServerConfig>,
}
