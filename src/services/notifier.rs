use std::sync::Arc;

use crate::ui::{Region, Surface, TOAST_DURATION, Toast, ToastLevel};

/// Loading overlay and toast messages.
#[derive(Clone)]
pub struct Notifier {
    surface: Arc<dyn Surface>,
}

impl Notifier {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self { surface }
    }

    pub fn show_loading(&self) {
        self.surface.set_visible(Region::LoadingOverlay, true);
    }

    pub fn hide_loading(&self) {
        self.surface.set_visible(Region::LoadingOverlay, false);
    }

    pub fn notify(&self, message: impl Into<String>, level: ToastLevel) {
        self.surface.toast(Toast {
            message: message.into(),
            level,
            duration: TOAST_DURATION,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Error);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Warning);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, ToastLevel::Info);
    }
}
