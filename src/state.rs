use crate::cache::EntityCache;
use crate::error::AppError;
use crate::services::tabs::TabController;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Succeeded,
    Failed,
}

impl GenerationStatus {
    /// Enters `Generating`; refused while a run is already in flight.
    pub fn begin(&mut self) -> Result<(), AppError> {
        if *self == GenerationStatus::Generating {
            return Err(AppError::GenerationInFlight);
        }
        *self = GenerationStatus::Generating;
        Ok(())
    }

    pub fn settle(&mut self, succeeded: bool) {
        *self = if succeeded {
            GenerationStatus::Succeeded
        } else {
            GenerationStatus::Failed
        };
    }
}

/// Everything the console mutates. Renderers only ever see it by shared reference.
#[derive(Debug, Default)]
pub struct AppState {
    pub cache: EntityCache,
    /// Most recently generated or viewed timetable; the target of exports.
    pub current_timetable_id: Option<String>,
    pub generation: GenerationStatus,
    pub tabs: TabController,
}

impl AppState {
    pub fn current_timetable(&self) -> Result<String, AppError> {
        self.current_timetable_id
            .clone()
            .ok_or(AppError::NoCurrentTimetable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_until_settled() {
        let mut status = GenerationStatus::default();
        status.begin().unwrap();
        assert!(matches!(status.begin(), Err(AppError::GenerationInFlight)));

        status.settle(false);
        assert_eq!(status, GenerationStatus::Failed);
        status.begin().unwrap();
        status.settle(true);
        assert_eq!(status, GenerationStatus::Succeeded);
    }

    #[test]
    fn no_current_timetable_until_set() {
        let mut state = AppState::default();
        assert!(matches!(state.current_timetable(), Err(AppError::NoCurrentTimetable)));
        state.current_timetable_id = Some("tt-1".into());
        assert_eq!(state.current_timetable().unwrap(), "tt-1");
    }
}
