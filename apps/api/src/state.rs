use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::editor::PortfolioEditor;
use crate::notify::NotificationSink;
use crate::showcase::ShowcaseRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only showcase content. Default: StaticShowcase.
    pub showcase: Arc<dyn ShowcaseRepository>,
    /// Profile editor state. Lives only as long as the process.
    pub editor: Arc<RwLock<PortfolioEditor>>,
}

impl AppState {
    pub fn new(
        config: Config,
        showcase: Arc<dyn ShowcaseRepository>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let editor = if config.seed_profile {
            PortfolioEditor::seeded(sink)
        } else {
            PortfolioEditor::empty(sink)
        }
        .with_toast_duration(config.toast_duration_ms);

        Self {
            config,
            showcase,
            editor: Arc::new(RwLock::new(editor)),
        }
    }
}
