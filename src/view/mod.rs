// Page rendering, one module per region

pub mod cta;
pub mod diagnostics;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod phases;
pub mod scenes;

use crate::app::Zillio;
use crate::content::{self, SectionId};
use crate::layout;
use eframe::egui;

impl Zillio {
    /// Lay out the whole page inside the scroll area, recording where each
    /// navigable section landed this frame.
    pub(crate) fn render_page(
        &mut self,
        ui: &mut egui::Ui,
        viewport_top: f32,
        frame_offset: f32,
        narrow: bool,
    ) {
        // Sections are seamless color bands; no gaps between them.
        ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
        let time = ui.input(|i| i.time);

        self.render_hero(ui, narrow, time);

        for phase in &content::PHASES {
            let rect = self.render_phase(ui, phase, narrow, time);
            self.anchors
                .record(phase.id, rect.top() - viewport_top, frame_offset);
        }

        let rect = self.render_diagnostics(ui, narrow, time);
        self.anchors
            .record(SectionId::Industries, rect.top() - viewport_top, frame_offset);

        let rect = self.render_cta(ui);
        self.anchors
            .record(SectionId::Contact, rect.top() - viewport_top, frame_offset);

        self.render_footer(ui, narrow);
    }
}

/// Run `add_contents` in a horizontally centered column capped at the
/// page's content width.
pub(crate) fn centered_column<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let content_w = layout::content_width(ui.available_width());
    let pad = ((ui.available_width() - content_w) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(pad);
        ui.vertical(|ui| {
            ui.set_width(content_w);
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
            add_contents(ui)
        })
        .inner
    })
    .inner
}
