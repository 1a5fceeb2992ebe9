use chrono::{DateTime, Utc};

use crate::config::SearchConfig;
use crate::store::DorkStore;

/// Shared handler state / 共享的处理器状态
pub struct AppState {
    pub store: DorkStore,
    /// Search link settings / 搜索链接设置
    pub search: SearchConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(search: SearchConfig) -> Self {
        Self {
            store: DorkStore::new(),
            search,
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
