// Section navigation - anchor resolution, menu state, scroll requests
use crate::content::SectionId;
use crate::layout;
use std::collections::HashMap;

/// Where a section sat when it was last rendered: its top edge relative to
/// the viewport, plus the scroll offset at that moment. The sum is the
/// section's position in page coordinates, so a target computed from a
/// stale frame still lands correctly.
#[derive(Clone, Copy, Debug)]
pub struct SectionAnchor {
    pub viewport_top: f32,
    pub scroll_offset: f32,
}

/// Per-frame registry of section positions. Cleared at the start of every
/// frame and repopulated while rendering; navigation resolves against the
/// latest frame rather than any cached layout.
#[derive(Default)]
pub struct AnchorMap {
    map: HashMap<SectionId, SectionAnchor>,
}

impl AnchorMap {
    pub fn begin_frame(&mut self) {
        self.map.clear();
    }

    pub fn record(&mut self, id: SectionId, viewport_top: f32, scroll_offset: f32) {
        self.map.insert(
            id,
            SectionAnchor {
                viewport_top,
                scroll_offset,
            },
        );
    }

    pub fn resolve(&self, id: SectionId) -> Option<SectionAnchor> {
        self.map.get(&id).copied()
    }
}

/// Absolute scroll offset that puts a section's top edge just below the
/// fixed navigation bar.
pub fn scroll_target(viewport_top: f32, scroll_offset: f32) -> f32 {
    viewport_top + scroll_offset - layout::SECTION_HEADER_OFFSET
}

/// Owns the menu flag and the outgoing one-shot scroll request. The render
/// layer drains the request and animates the viewport; a request issued
/// while another is in flight simply replaces it.
pub struct SectionNavigator {
    menu_open: bool,
    scroll_request: Option<f32>,
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self {
            menu_open: false,
            scroll_request: None,
        }
    }

    /// Navigate to a resolved anchor. The menu closes before the lookup
    /// result is consulted, so an unresolved section still dismisses it;
    /// the missing-anchor case is otherwise a silent no-op.
    pub fn navigate(&mut self, anchor: Option<SectionAnchor>) {
        self.menu_open = false;
        if let Some(anchor) = anchor {
            self.scroll_request =
                Some(scroll_target(anchor.viewport_top, anchor.scroll_offset));
        }
    }

    /// The logo click: back to the very top, no header offset.
    pub fn scroll_to_top(&mut self) {
        self.menu_open = false;
        self.scroll_request = Some(0.0);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn take_scroll_request(&mut self) -> Option<f32> {
        self.scroll_request.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ScrollObserver;

    #[test]
    fn test_scroll_target_formula() {
        assert_eq!(scroll_target(800.0, 200.0), 900.0);
        assert_eq!(scroll_target(800.0, 0.0), 700.0);
        assert_eq!(scroll_target(800.0, -40.0), 660.0);
        assert_eq!(scroll_target(-120.0, 500.0), 280.0);
    }

    #[test]
    fn test_missing_anchor_is_a_silent_noop() {
        let mut nav = SectionNavigator::new();
        nav.navigate(None);
        assert!(nav.take_scroll_request().is_none());
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_navigation_always_closes_the_menu() {
        let anchor = Some(SectionAnchor {
            viewport_top: 300.0,
            scroll_offset: 0.0,
        });

        let mut nav = SectionNavigator::new();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.navigate(anchor);
        assert!(!nav.menu_open());

        // And from the already-closed state.
        nav.navigate(anchor);
        assert!(!nav.menu_open());

        // A missing target still dismisses the menu.
        nav.toggle_menu();
        nav.navigate(None);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_menu_toggle_alternates_from_false() {
        let mut nav = SectionNavigator::new();
        assert!(!nav.menu_open());
        for i in 0..6 {
            nav.toggle_menu();
            assert_eq!(nav.menu_open(), i % 2 == 0);
        }
    }

    #[test]
    fn test_repeat_navigation_recomputes_freshly() {
        let mut nav = SectionNavigator::new();
        nav.navigate(Some(SectionAnchor {
            viewport_top: 800.0,
            scroll_offset: 200.0,
        }));
        assert_eq!(nav.take_scroll_request(), Some(900.0));

        // Layout shifted between calls; the second request self-corrects.
        nav.navigate(Some(SectionAnchor {
            viewport_top: 750.0,
            scroll_offset: 260.0,
        }));
        assert_eq!(nav.take_scroll_request(), Some(910.0));
        assert_eq!(nav.take_scroll_request(), None);
    }

    #[test]
    fn test_page_flow_end_to_end() {
        let mut observer = ScrollObserver::new();
        let mut anchors = AnchorMap::default();
        let mut nav = SectionNavigator::new();

        observer.note_offset(0.0);
        assert!(!observer.past_threshold());

        observer.note_offset(200.0);
        assert!(observer.past_threshold());

        anchors.begin_frame();
        anchors.record(crate::content::SectionId::Audit, 800.0, observer.offset());

        nav.toggle_menu();
        nav.navigate(anchors.resolve(crate::content::SectionId::Audit));
        assert_eq!(nav.take_scroll_request(), Some(900.0));
        assert!(!nav.menu_open());
    }
}
