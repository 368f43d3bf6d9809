use crate::core::config::AppConfig;
use crate::ui::tray::TrayController;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedTray = Arc<RwLock<TrayController>>;

/// Process-wide state, built once in `run` and handed to Tauri as managed state
pub struct AppContext {
    pub config: AppConfig,
    pub tray: SharedTray,
}

impl AppContext {
    pub fn new(config: AppConfig, tray: TrayController) -> Self {
        Self {
            config,
            tray: Arc::new(RwLock::new(tray)),
        }
    }
}
