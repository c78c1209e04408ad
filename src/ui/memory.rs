use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Region, Surface, Tab, Toast};
use crate::models::{EntityKind, FormFields};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Html(Region),
    Text(Region, String),
    Visible(Region, bool),
    Class(Region, String),
    Active(Tab, bool),
    Toast(Toast),
    Open(String),
    Reset(EntityKind),
}

#[derive(Default)]
struct Page {
    html: HashMap<Region, String>,
    text: HashMap<Region, String>,
    visible: HashMap<Region, bool>,
    class: HashMap<Region, String>,
    active: HashMap<Tab, bool>,
    forms: HashMap<EntityKind, FormFields>,
    events: Vec<SurfaceEvent>,
}

/// Headless page that keeps the latest content of every region and a log of
/// every write.
#[derive(Default)]
pub struct MemorySurface {
    page: Mutex<Page>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Simulates the user typing into an "add" form.
    pub fn fill_form(&self, kind: EntityKind, fields: FormFields) {
        self.page().forms.insert(kind, fields);
    }

    pub fn html(&self, region: Region) -> Option<String> {
        self.page().html.get(&region).cloned()
    }

    pub fn text(&self, region: Region) -> Option<String> {
        self.page().text.get(&region).cloned()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.page().visible.get(&region).copied().unwrap_or(false)
    }

    pub fn class(&self, region: Region) -> Option<String> {
        self.page().class.get(&region).cloned()
    }

    pub fn active_tabs(&self) -> Vec<Tab> {
        let page = self.page();
        Tab::ALL
            .into_iter()
            .filter(|tab| page.active.get(tab).copied().unwrap_or(false))
            .collect()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.page()
            .events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Toast(toast) => Some(toast.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_toast(&self) -> Option<Toast> {
        self.toasts().pop()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.page()
            .events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Open(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn form(&self, kind: EntityKind) -> FormFields {
        self.page().forms.get(&kind).cloned().unwrap_or_default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.page().events.clone()
    }

    /// Number of times `region` was redrawn.
    pub fn html_writes(&self, region: Region) -> usize {
        self.page()
            .events
            .iter()
            .filter(|event| **event == SurfaceEvent::Html(region))
            .count()
    }
}

impl Surface for MemorySurface {
    fn set_html(&self, region: Region, html: String) {
        let mut page = self.page();
        page.html.insert(region, html);
        page.events.push(SurfaceEvent::Html(region));
    }

    fn set_text(&self, region: Region, text: String) {
        let mut page = self.page();
        page.text.insert(region, text.clone());
        page.events.push(SurfaceEvent::Text(region, text));
    }

    fn set_visible(&self, region: Region, visible: bool) {
        let mut page = self.page();
        page.visible.insert(region, visible);
        page.events.push(SurfaceEvent::Visible(region, visible));
    }

    fn set_class(&self, region: Region, class: &str) {
        let mut page = self.page();
        page.class.insert(region, class.to_string());
        page.events.push(SurfaceEvent::Class(region, class.to_string()));
    }

    fn set_active(&self, tab: Tab, active: bool) {
        let mut page = self.page();
        page.active.insert(tab, active);
        page.events.push(SurfaceEvent::Active(tab, active));
    }

    fn toast(&self, toast: Toast) {
        self.page().events.push(SurfaceEvent::Toast(toast));
    }

    fn open_in_new_context(&self, url: &str) {
        self.page().events.push(SurfaceEvent::Open(url.to_string()));
    }

    fn form_values(&self, kind: EntityKind) -> FormFields {
        self.form(kind)
    }

    fn reset_form(&self, kind: EntityKind) {
        let mut page = self.page();
        page.forms.remove(&kind);
        page.events.push(SurfaceEvent::Reset(kind));
    }
}
