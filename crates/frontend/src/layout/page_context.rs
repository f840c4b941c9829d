use crate::shared::dom;
use crate::shared::rate_limit::throttle;
use contracts::shared::scroll::EFFECTS_THROTTLE_MS;
use contracts::shared::widgets::MenuState;
use leptos::prelude::*;

/// Page-wide view state shared by the navbar, hero and section links.
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Scroll position, sampled at most once per frame.
    pub scroll_y: RwSignal<f64>,
    /// Id of the section whose nav link is highlighted.
    pub active_section: RwSignal<Option<String>>,
    pub menu: RwSignal<MenuState>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            scroll_y: RwSignal::new(0.0),
            active_section: RwSignal::new(None),
            menu: RwSignal::new(MenuState::default()),
        }
    }

    /// Keep `scroll_y` in sync with the window for the per-frame effects.
    pub fn track_scroll(&self) {
        let scroll_y = self.scroll_y;
        scroll_y.set(dom::scroll_y());

        let sync = throttle(EFFECTS_THROTTLE_MS, move |_: ()| scroll_y.set(dom::scroll_y()));
        let _ = window_event_listener(leptos::ev::scroll, move |_| sync(()));
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|m| *m = m.toggled());
    }

    pub fn close_menu(&self) {
        if self.menu.get_untracked().is_open() {
            self.menu.set(MenuState::Closed);
        }
    }

    /// Highlight `section_id`, scroll to it and collapse the mobile menu.
    /// Does nothing if the section is not on the page.
    pub fn navigate_to(&self, section_id: &str) {
        if !dom::scroll_into_view(section_id) {
            log::debug!("no section #{} on the page", section_id);
            return;
        }
        log::debug!("navigate to #{}", section_id);
        self.active_section.set(Some(section_id.to_string()));
        self.close_menu();
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section
            .with(|active| active.as_deref() == Some(section_id))
    }
}
