use tracing::{error, info, warn};

use super::Console;
use crate::api::Ack;
use crate::error::AppError;
use crate::models::EntityKind;

impl Console {
    /// Posts the "add" form for `kind`. On success the form is closed and the
    /// collection plus the dashboard counts are reloaded; on failure the form
    /// keeps whatever the user typed.
    pub async fn submit_form(&self, kind: EntityKind) -> bool {
        let fields = self.surface.form_values(kind);
        info!("submitting new {} ({} fields)", kind.noun(), fields.len());

        self.notifier.show_loading();
        let result = self
            .api
            .create_entity(kind, &fields)
            .await
            .and_then(Ack::into_result);
        self.notifier.hide_loading();

        match result {
            Ok(()) => {
                self.notifier
                    .success(format!("{} added successfully!", kind.title()));
                self.hide_add_form(kind);
                tokio::join!(self.refresh(kind), self.refresh_stats());
                true
            }
            Err(e @ AppError::Rejected(_)) => {
                warn!("server rejected new {}: {}", kind.noun(), e);
                let message = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Failed to add {}", kind.noun()));
                self.notifier.error(message);
                false
            }
            Err(e) => {
                error!("error adding {}: {}", kind.noun(), e);
                self.notifier.error(format!("Error adding {}", kind.noun()));
                false
            }
        }
    }
}
