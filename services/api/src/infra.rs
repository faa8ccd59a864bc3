use coldflow::config::AppConfig;
use coldflow::error::AppError;
use coldflow::workflows::rulebook::RuleBook;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// An explicit path wins over `APP_RULES_PATH`; without either the built-in tables apply.
pub(crate) fn load_rulebook(path: Option<PathBuf>) -> Result<RuleBook, AppError> {
    let rulebook = match path {
        Some(path) => RuleBook::from_path(path)?,
        None => AppConfig::load()?.rulebook()?,
    };
    Ok(rulebook)
}
