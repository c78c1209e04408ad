use serde_json::Value;
use tracing::{debug, warn};

use super::Console;
use crate::api::Envelope;
use crate::error::AppError;
use crate::models::EntityKind;
use crate::render;
use crate::ui::Region;

/// Record counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub courses: usize,
    pub faculty: usize,
    pub rooms: usize,
    pub students: usize,
}

impl DashboardStats {
    pub fn get(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Courses => self.courses,
            EntityKind::Faculty => self.faculty,
            EntityKind::Rooms => self.rooms,
            EntityKind::Students => self.students,
        }
    }

    fn set(&mut self, kind: EntityKind, count: usize) {
        match kind {
            EntityKind::Courses => self.courses = count,
            EntityKind::Faculty => self.faculty = count,
            EntityKind::Rooms => self.rooms = count,
            EntityKind::Students => self.students = count,
        }
    }
}

type ListResult = Result<Envelope<Vec<Value>>, AppError>;

impl Console {
    /// Reloads one collection and redraws its table. Failures keep the
    /// previous snapshot and surface a toast.
    pub async fn refresh(&self, kind: EntityKind) {
        let response = self.api.list_entities(kind).await;
        self.apply_snapshot(kind, response).await;
    }

    /// Reloads all four collections concurrently; each kind succeeds or
    /// fails on its own.
    pub async fn refresh_all(&self) {
        let (courses, faculty, rooms, students) = tokio::join!(
            self.api.list_entities(EntityKind::Courses),
            self.api.list_entities(EntityKind::Faculty),
            self.api.list_entities(EntityKind::Rooms),
            self.api.list_entities(EntityKind::Students),
        );

        // Faculty first, so the course table joins against this pass's data.
        self.apply_snapshot(EntityKind::Faculty, faculty).await;
        self.apply_snapshot(EntityKind::Courses, courses).await;
        self.apply_snapshot(EntityKind::Rooms, rooms).await;
        self.apply_snapshot(EntityKind::Students, students).await;
    }

    async fn apply_snapshot(&self, kind: EntityKind, response: ListResult) {
        let rows = response.and_then(Envelope::into_result);

        let html = {
            let mut state = self.state.lock().await;
            match rows.and_then(|rows| state.cache.replace(kind, rows)) {
                Ok(()) => Ok(render::entity_table(kind, &state.cache)),
                Err(e) => Err(e),
            }
        };

        match html {
            Ok(html) => {
                debug!("refreshed {}", kind);
                self.surface.set_html(Region::TableBody(kind), html);
            }
            Err(e) => {
                warn!("failed to load {}: {}", kind, e);
                let message = match e.server_message() {
                    Some(message) => message.to_string(),
                    None => format!("Failed to load {}", kind),
                };
                self.notifier.error(message);
            }
        }
    }

    /// Counts every collection for the dashboard without touching the cache.
    /// Anything that is not a list of rows counts as zero.
    pub async fn refresh_stats(&self) -> DashboardStats {
        let (courses, faculty, rooms, students) = tokio::join!(
            self.api.list_entities(EntityKind::Courses),
            self.api.list_entities(EntityKind::Faculty),
            self.api.list_entities(EntityKind::Rooms),
            self.api.list_entities(EntityKind::Students),
        );

        let mut stats = DashboardStats::default();
        let responses = [
            (EntityKind::Courses, courses),
            (EntityKind::Faculty, faculty),
            (EntityKind::Rooms, rooms),
            (EntityKind::Students, students),
        ];
        for (kind, response) in responses {
            let count = match response {
                Ok(envelope) => envelope.data.map_or(0, |rows| rows.len()),
                Err(e) => {
                    warn!("failed to count {}: {}", kind, e);
                    0
                }
            };
            stats.set(kind, count);
            self.surface
                .set_text(Region::StatCount(kind), count.to_string());
        }
        stats
    }
}
