//! Application state.

use seoaudit_core::{AnalyzerConfig, AuditResult, Auditor};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auditor: Arc<Auditor>,
}

impl AppState {
    pub fn new(auditor: Auditor) -> Self {
        Self {
            auditor: Arc::new(auditor),
        }
    }

    /// Build state from a config, compiling patterns and the HTTP client once.
    pub fn from_config(config: AnalyzerConfig) -> AuditResult<Self> {
        Ok(Self::new(Auditor::new(config)?))
    }
}
