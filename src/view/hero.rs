// Hero section: full-viewport painted backdrop with the headline overlay

use crate::app::Zillio;
use crate::content::{self, SectionId};
use crate::layout;
use crate::style;
use crate::view::scenes;
use eframe::egui;
use egui_extras::{Size, StripBuilder};

impl Zillio {
    pub(crate) fn render_hero(&mut self, ui: &mut egui::Ui, narrow: bool, time: f64) {
        let width = ui.available_width();
        let height = ui.ctx().screen_rect().height();
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

        scenes::hero::paint(ui.painter(), rect, time);

        let mut explore = false;
        ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
            StripBuilder::new(ui)
                .size(Size::remainder())
                .size(Size::exact(if narrow { 380.0 } else { 420.0 }))
                .size(Size::remainder())
                .size(Size::exact(90.0))
                .vertical(|mut strip| {
                    strip.empty();
                    strip.cell(|ui| {
                        hero_copy(ui, narrow, &mut explore);
                    });
                    strip.empty();
                    strip.cell(|ui| {
                        scroll_hint(ui, time);
                    });
                });
        });

        if explore {
            self.navigate_to(SectionId::Awakening);
        }
    }
}

fn hero_copy(ui: &mut egui::Ui, narrow: bool, explore: &mut bool) {
    ui.vertical_centered(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 10.0);

        let badge = egui::Frame::new()
            .fill(egui::Color32::from_rgba_unmultiplied(28, 25, 23, 110))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(50)))
            .corner_radius(egui::CornerRadius::same(14))
            .inner_margin(egui::Margin::symmetric(14, 6));
        badge.show(ui, |ui| {
            ui.label(style::eyebrow(content::HERO_BADGE, egui::Color32::WHITE));
        });
        ui.add_space(10.0);

        let title_size = if narrow { 48.0 } else { style::HERO_TITLE_SIZE };
        ui.label(
            egui::RichText::new(content::HERO_TITLE)
                .size(title_size)
                .strong()
                .color(egui::Color32::WHITE),
        );
        ui.label(
            egui::RichText::new(content::HERO_TAGLINE)
                .size(if narrow { 18.0 } else { 24.0 })
                .italics()
                .color(style::STONE_200),
        );
        ui.add_space(14.0);

        ui.scope(|ui| {
            ui.set_max_width(620.0_f32.min(ui.available_width() - 2.0 * layout::PAGE_MARGIN));
            ui.label(
                egui::RichText::new(content::HERO_LEDE)
                    .size(17.0)
                    .color(style::STONE_100),
            );
        });
        ui.add_space(20.0);

        let button = egui::Button::new(
            egui::RichText::new(content::HERO_CTA)
                .size(11.0)
                .strong()
                .color(style::STONE_900),
        )
        .fill(egui::Color32::WHITE)
        .corner_radius(egui::CornerRadius::same(20))
        .min_size(egui::vec2(210.0, 40.0));
        if ui
            .add(button)
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
        {
            *explore = true;
        }
    });
}

fn scroll_hint(ui: &mut egui::Ui, time: f64) {
    let rect = ui.max_rect();
    let phase = time * std::f64::consts::TAU / layout::SCROLL_HINT_PERIOD_SECS;
    let bounce = (phase.sin() * 0.5 + 0.5) as f32 * 10.0;
    ui.painter().text(
        egui::pos2(rect.center().x, rect.top() + 16.0 + bounce),
        egui::Align2::CENTER_CENTER,
        "↓",
        egui::FontId::proportional(20.0),
        egui::Color32::WHITE,
    );
}
