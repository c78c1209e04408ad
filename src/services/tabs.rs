use crate::ui::Tab;

/// Side effect owed when a pane is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterEffect {
    RefreshSavedTimetables,
}

/// Exactly one pane is active at any time.
#[derive(Debug, Clone)]
pub struct TabController {
    active: Tab,
}

impl Default for TabController {
    fn default() -> Self {
        Self {
            active: Tab::Dashboard,
        }
    }
}

impl TabController {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn activate(&mut self, tab: Tab) -> Option<EnterEffect> {
        self.active = tab;
        match tab {
            Tab::View => Some(EnterEffect::RefreshSavedTimetables),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_view_has_an_enter_effect() {
        let mut tabs = TabController::default();
        for tab in Tab::ALL {
            let effect = tabs.activate(tab);
            assert_eq!(tabs.active(), tab);
            assert_eq!(effect.is_some(), tab == Tab::View, "{tab:?}");
        }
    }

    #[test]
    fn activating_replaces_previous_pane() {
        let mut tabs = TabController::default();
        assert_eq!(tabs.active(), Tab::Dashboard);
        tabs.activate(Tab::Rooms);
        assert_eq!(tabs.active(), Tab::Rooms);
    }
}
