use crate::config::Config;
use crate::content::SectionId;
use crate::layout;
use crate::state::{AnchorMap, ScrollAnimation, ScrollObserver, SectionNavigator};
use crate::style;
use eframe::egui;
use std::time::Duration;

pub struct Zillio {
    pub config: Config,

    // Controller state
    pub scroll: ScrollObserver,
    pub nav: SectionNavigator,
    pub anchors: AnchorMap,

    // Render-layer state
    pub scroll_anim: Option<ScrollAnimation>,
    /// Section click picked up during this frame; resolved against the
    /// anchor map once the whole page has been laid out.
    pending_nav: Option<SectionId>,
    /// Time at which the diagnostics grid first entered the viewport,
    /// anchoring the staggered card fade-in.
    pub cards_revealed_at: Option<f64>,
}

impl Zillio {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scroll: ScrollObserver::new(),
            nav: SectionNavigator::new(),
            anchors: AnchorMap::default(),
            scroll_anim: None,
            pending_nav: None,
            cards_revealed_at: None,
        }
    }

    /// Queue a section navigation. Shared by nav links, the menu overlay,
    /// the hero button, the diagnostics trailer, and the keyboard
    /// shortcuts. Resolution waits until the end of the frame so clicks
    /// fired mid-layout see a fully populated anchor map.
    pub(crate) fn navigate_to(&mut self, id: SectionId) {
        self.pending_nav = Some(id);
    }

    fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.config.scroll.animation_ms)
    }

    /// Turn a drained scroll request into an animation, retargeting from
    /// the current offset if one is already running.
    fn start_scroll(&mut self, target: f32) {
        let target = target.max(0.0);
        self.scroll_anim = Some(if self.config.scroll.reduce_motion {
            ScrollAnimation::instant(target)
        } else {
            ScrollAnimation::new(self.scroll.offset(), target, self.scroll_duration())
        });
    }
}

impl eframe::App for Zillio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let narrow = layout::is_narrow(ctx);
        if !narrow && self.nav.menu_open() {
            // The overlay only exists on narrow viewports; don't let it
            // linger invisibly after a resize.
            self.nav.close_menu();
        }

        // Sample the in-flight animation before rendering so this frame's
        // offset (and the anchors recorded under it) agree.
        let anim_offset = self.scroll_anim.as_ref().map(|a| a.offset_now());
        if self.scroll_anim.as_ref().is_some_and(|a| a.finished()) {
            self.scroll_anim = None;
        }

        self.anchors.begin_frame();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(style::PARCHMENT))
            .show(ctx, |ui| {
                let viewport_top = ui.max_rect().top();
                let frame_offset = anim_offset.unwrap_or(self.scroll.offset());

                let mut area = egui::ScrollArea::vertical().auto_shrink([false, false]);
                if let Some(y) = anim_offset {
                    area = area.vertical_scroll_offset(y.max(0.0));
                }

                let output = area.show(ui, |ui| {
                    self.render_page(ui, viewport_top, frame_offset, narrow);
                });

                self.scroll.note_offset(output.state.offset.y);
            });

        if narrow && self.nav.menu_open() {
            self.render_menu_overlay(ctx);
        }
        self.render_navbar(ctx, narrow);

        if let Some(id) = self.pending_nav.take() {
            let anchor = self.anchors.resolve(id);
            self.nav.navigate(anchor);
        }
        if let Some(target) = self.nav.take_scroll_request() {
            self.start_scroll(target);
        }

        // The hero backdrop and phase visuals animate continuously.
        ctx.request_repaint();
    }
}
