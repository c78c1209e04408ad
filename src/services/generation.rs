use tracing::{error, info, warn};

use super::Console;
use crate::api::{Envelope, ExportFormat, GenerateRequest};
use crate::models::Timetable;
use crate::render;
use crate::ui::{Region, Tab};

const GENERIC_GENERATION_FAILURE: &str =
    "Could not reach the timetable server. Please try again.";

impl Console {
    /// Server-side readiness check. Advisory only: it never gates `generate`.
    pub async fn validate(&self) {
        self.notifier.show_loading();
        let result = self.api.validate_data().await;
        self.notifier.hide_loading();

        match result {
            Ok(report) => {
                let class = if report.success {
                    "validation-result success"
                } else {
                    "validation-result error"
                };
                info!(
                    "data validation: success={} errors={} warnings={}",
                    report.success,
                    report.errors.len(),
                    report.warnings.len()
                );
                self.surface.set_visible(Region::ValidationResult, true);
                self.surface.set_class(Region::ValidationResult, class);
                self.surface
                    .set_html(Region::ValidationResult, render::validation_report(&report));
            }
            Err(e) => {
                error!("error validating data: {}", e);
                self.notifier.error("Error validating data");
            }
        }
    }

    /// Runs one generation. A call made while another is in flight is
    /// refused without a request.
    pub async fn generate(&self, request: GenerateRequest) {
        let begun = self.state.lock().await.generation.begin();
        if let Err(e) = begun {
            warn!("ignoring generate request: {}", e);
            self.notifier.warning("Timetable generation is already in progress");
            return;
        }

        info!(
            "generating timetable for {} / {} ({})",
            request.program, request.semester, request.algorithm
        );
        self.surface.set_visible(Region::GenerationProgress, true);
        self.surface.set_visible(Region::GenerationResult, false);

        let result = self.api.generate_timetable(&request).await;

        self.surface.set_visible(Region::GenerationProgress, false);

        let (class, html) = match result {
            Ok(response) if response.success => {
                {
                    let mut state = self.state.lock().await;
                    state.generation.settle(true);
                    match &response.timetable_id {
                        Some(id) => state.current_timetable_id = Some(id.clone()),
                        None => warn!("generated timetable was not saved by the server"),
                    }
                }
                info!(
                    "generated timetable {:?} with {} sessions",
                    response.timetable_id,
                    response.session_count()
                );
                self.notifier.success("Timetable generated successfully!");
                ("result-container success", render::generation_summary(&response))
            }
            Ok(response) => {
                self.state.lock().await.generation.settle(false);
                let message = response
                    .message
                    .unwrap_or_else(|| "Timetable generation failed".to_string());
                warn!("timetable generation rejected: {}", message);
                self.notifier.error("Failed to generate timetable");
                ("result-container error", render::generation_failure(&message))
            }
            Err(e) => {
                self.state.lock().await.generation.settle(false);
                error!("error generating timetable: {}", e);
                self.notifier.error("Error generating timetable");
                (
                    "result-container error",
                    render::generation_failure(GENERIC_GENERATION_FAILURE),
                )
            }
        };

        self.surface.set_class(Region::GenerationResult, class);
        self.surface.set_html(Region::GenerationResult, html);
        self.surface.set_visible(Region::GenerationResult, true);
    }

    /// Opens the current timetable in the viewer.
    pub async fn view_generated(&self) {
        let current = self.state.lock().await.current_timetable();
        match current {
            Ok(id) => self.load_timetable_by_id(&id).await,
            Err(e) => {
                warn!("view requested: {}", e);
                self.notifier.warning("No timetable selected");
            }
        }
    }

    /// Fetches a saved timetable, makes it current and shows it in the view pane.
    pub async fn load_timetable_by_id(&self, id: &str) {
        self.notifier.show_loading();
        let result = self
            .api
            .fetch_timetable(id)
            .await
            .and_then(Envelope::into_result);
        self.notifier.hide_loading();

        match result {
            Ok(timetable) => {
                self.state.lock().await.current_timetable_id = Some(id.to_string());
                self.display_timetable(&timetable);
                self.switch_tab(Tab::View).await;
            }
            Err(e) => {
                warn!("failed to load timetable {}: {}", id, e);
                let message = e.server_message().unwrap_or("Error loading timetable");
                self.notifier.error(message);
            }
        }
    }

    fn display_timetable(&self, timetable: &Timetable) {
        self.surface
            .set_text(Region::ViewerTitle, render::viewer_title(timetable));
        self.surface
            .set_html(Region::TimetableContent, render::grid(timetable));
        self.surface.set_visible(Region::TimetableViewer, true);
    }

    /// Redraws the saved-timetable cards; anything but a non-empty list
    /// shows the placeholder.
    pub async fn list_saved(&self) {
        let result = self
            .api
            .list_timetables()
            .await
            .and_then(Envelope::into_result);

        let timetables = match result {
            Ok(timetables) => timetables,
            Err(e) => {
                warn!("failed to load timetables: {}", e);
                let message = e.server_message().unwrap_or("Failed to load timetables");
                self.notifier.error(message);
                Vec::new()
            }
        };
        self.surface
            .set_html(Region::TimetablesList, render::saved_list(&timetables));
    }

    /// Hands the download to the surface. Returns whether anything was opened.
    pub async fn export(&self, format: ExportFormat) -> bool {
        let current = self.state.lock().await.current_timetable();
        let Ok(id) = current else {
            warn!("export requested with no current timetable");
            self.notifier.warning("No timetable selected");
            return false;
        };

        let url = self.api.export_url(format, &id);
        info!("exporting timetable {} as {}", id, format.label());
        self.surface.open_in_new_context(&url);
        self.notifier
            .success(format!("Downloading {}...", format.label()));
        true
    }

    pub async fn export_pdf(&self) -> bool {
        self.export(ExportFormat::Pdf).await
    }

    pub async fn export_excel(&self) -> bool {
        self.export(ExportFormat::Excel).await
    }
}
