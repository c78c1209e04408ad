use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use super::notifier::Notifier;
use super::tabs::EnterEffect;
use crate::api::TimetableApi;
use crate::cache::EntityCache;
use crate::models::EntityKind;
use crate::render;
use crate::state::{AppState, GenerationStatus};
use crate::ui::{Region, Surface, Tab};

/// The console controller: owns the application state and drives the page
/// through a [`Surface`] in response to user actions.
///
/// The state lock is never held across a request, so overlapping actions
/// interleave and the last response to land wins each slot.
pub struct Console {
    pub(super) api: Arc<dyn TimetableApi>,
    pub(super) surface: Arc<dyn Surface>,
    pub(super) notifier: Notifier,
    pub(super) state: Mutex<AppState>,
}

impl Console {
    pub fn new(api: Arc<dyn TimetableApi>, surface: Arc<dyn Surface>) -> Self {
        Self {
            api,
            notifier: Notifier::new(surface.clone()),
            surface,
            state: Mutex::new(AppState::default()),
        }
    }

    /// Page start-up: dashboard pane, counts, and every collection.
    pub async fn init(&self) {
        info!("initializing console");
        self.switch_tab(Tab::Dashboard).await;
        tokio::join!(self.refresh_stats(), self.refresh_all());
    }

    pub async fn switch_tab(&self, tab: Tab) {
        let effect = self.state.lock().await.tabs.activate(tab);

        for other in Tab::ALL {
            self.surface.set_active(other, false);
        }
        self.surface.set_active(tab, true);

        if let Some(EnterEffect::RefreshSavedTimetables) = effect {
            self.list_saved().await;
        }
    }

    pub async fn show_add_form(&self, kind: EntityKind) {
        self.surface.set_visible(Region::AddForm(kind), true);
        if kind == EntityKind::Courses {
            let options = render::faculty_options(&self.state.lock().await.cache);
            self.surface.set_html(Region::FacultySelect, options);
        }
    }

    pub fn hide_add_form(&self, kind: EntityKind) {
        self.surface.set_visible(Region::AddForm(kind), false);
        self.surface.reset_form(kind);
    }

    pub fn close_viewer(&self) {
        self.surface.set_visible(Region::TimetableViewer, false);
    }

    pub async fn check_health(&self) -> bool {
        match self.api.health().await {
            Ok(health) => {
                self.notifier
                    .info(format!("{}: {}", health.status, health.message));
                true
            }
            Err(e) => {
                warn!("health check failed: {}", e);
                self.notifier.error("Timetable server is unreachable");
                false
            }
        }
    }

    pub async fn active_tab(&self) -> Tab {
        self.state.lock().await.tabs.active()
    }

    pub async fn current_timetable_id(&self) -> Option<String> {
        self.state.lock().await.current_timetable_id.clone()
    }

    pub async fn generation_status(&self) -> GenerationStatus {
        self.state.lock().await.generation
    }

    /// Copy of the cached collections.
    pub async fn cache(&self) -> EntityCache {
        self.state.lock().await.cache.clone()
    }
}
