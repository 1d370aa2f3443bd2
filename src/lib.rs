//! # Audience - segment builder
//!
//! Lets a user name an audience segment, pick the user and group traits that
//! describe it from a fixed catalog, and submit the result as JSON to a
//! webhook.
//!
//! ## Layout
//!
//! - **Domain**: catalog, the [`SegmentEditor`](domain::SegmentEditor) state
//!   machine, payload and notification types. Always compiled, including for
//!   the wasm front end in `ui/`.
//! - **Config / CLI / Adapters** (`server` feature): the native host that
//!   serves the web UI, tells it where to send segments, and can submit a
//!   segment from the command line.
//!
//! ```rust
//! use audience::domain::{RecordingNotifier, SegmentEditor};
//!
//! let mut editor = SegmentEditor::new();
//! editor.open();
//! editor.set_name("Segment A");
//! editor.add_selection("first_name").unwrap();
//! editor.add_selection("city").unwrap();
//!
//! let submission = editor.begin_submit(&RecordingNotifier::new()).unwrap();
//! assert_eq!(submission.payload.schema.len(), 2);
//! ```

pub mod domain;

#[cfg(feature = "server")]
pub mod adapters;
#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub use app::{create_app, submit_segment};

#[cfg(feature = "server")]
mod app {
    use crate::adapters::api_handler::{self, ApiState};
    use crate::adapters::health_handler::HealthHandler;
    use crate::adapters::ui_handler::UIHandler;
    use crate::config::Settings;
    use crate::domain::{Notifier, SegmentEditor, SegmentSink, SubmitOutcome};
    use axum::{routing::get, Router};
    use std::sync::Arc;

    /// Creates the Axum application router.
    ///
    /// The host keeps no segment state: it only reports health, hands the UI
    /// its runtime settings and serves the compiled front end.
    pub fn create_app(settings: Arc<Settings>, health_handler: Arc<HealthHandler>) -> Router {
        let api_router = Router::new()
            .route("/ui-config", get(api_handler::get_ui_config))
            .with_state(ApiState { settings });

        Router::new()
            .route("/health", get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.health().await }
                }
            }))
            .nest("/api", api_router)
            .fallback(UIHandler::serve)
    }

    /// Submit one segment without the UI. Every schema value must be a
    /// distinct catalog field; nothing is sent otherwise.
    pub async fn submit_segment(
        sink: &dyn SegmentSink,
        notifier: &dyn Notifier,
        name: &str,
        schema: &[String],
    ) -> anyhow::Result<()> {
        let mut editor = SegmentEditor::draft(name, schema)
            .map_err(|e| anyhow::anyhow!("Invalid --schema value: {}", e))?;

        match editor.submit(sink, notifier).await {
            SubmitOutcome::Sent => Ok(()),
            SubmitOutcome::Rejected(e) => Err(anyhow::anyhow!(e)),
            SubmitOutcome::Failed(e) => Err(anyhow::anyhow!("Failed to send segment: {}", e)),
            SubmitOutcome::Busy => Err(anyhow::anyhow!("A submission is already in progress")),
        }
    }
}
