//! Frontend Configuration
//!
//! Build-time settings (`option_env!`) with runtime fallbacks from the page.

use board_sync::loader::DEFAULT_WORKSPACE_NAME;
use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Root of the REST API, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
    pub default_workspace_name: String,
}

impl AppConfig {
    /// `TASKFLOW_API_BASE` / `TASKFLOW_LOG_LEVEL` at build time, else `<origin>/api` and `info`
    pub fn load() -> Self {
        let api_base_url = option_env!("TASKFLOW_API_BASE")
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}/api", window_origin().unwrap_or_default()));
        let log_level = option_env!("TASKFLOW_LOG_LEVEL")
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            log_level,
            default_workspace_name: DEFAULT_WORKSPACE_NAME.to_string(),
        }
    }
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
