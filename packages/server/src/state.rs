use std::sync::Arc;

use common::backend::AnalysisBackend;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AnalysisBackend>,
    pub config: AppConfig,
}
