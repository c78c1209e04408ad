use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use super::{Region, Surface, Tab, Toast};
use crate::models::{EntityKind, FormFields};

/// Prints page updates to stdout; used by the command-line front end.
#[derive(Default)]
pub struct TerminalSurface {
    forms: Mutex<HashMap<EntityKind, FormFields>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(mut self, kind: EntityKind, fields: FormFields) -> Self {
        if let Ok(forms) = self.forms.get_mut() {
            forms.insert(kind, fields);
        }
        self
    }
}

impl Surface for TerminalSurface {
    fn set_html(&self, region: Region, html: String) {
        println!("--- #{} ---\n{}", region.id(), html.trim());
    }

    fn set_text(&self, region: Region, text: String) {
        println!("#{}: {}", region.id(), text);
    }

    fn set_visible(&self, region: Region, visible: bool) {
        debug!("#{} visible={}", region.id(), visible);
    }

    fn set_class(&self, region: Region, class: &str) {
        debug!("#{} class={}", region.id(), class);
    }

    fn set_active(&self, tab: Tab, active: bool) {
        if active {
            debug!("active tab: {}", tab.id());
        }
    }

    fn toast(&self, toast: Toast) {
        println!("[{}] {}", toast.level.class(), toast.message);
    }

    fn open_in_new_context(&self, url: &str) {
        println!("download: {}", url);
    }

    fn form_values(&self, kind: EntityKind) -> FormFields {
        self.forms
            .lock()
            .ok()
            .and_then(|forms| forms.get(&kind).cloned())
            .unwrap_or_default()
    }

    fn reset_form(&self, kind: EntityKind) {
        if let Ok(mut forms) = self.forms.lock() {
            forms.remove(&kind);
        }
    }
}
