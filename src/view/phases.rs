// The three narrative phase sections
// Each is a full-width color band: decorative art on one side, copy on
// the other, stacked vertically on narrow viewports.

use crate::app::Zillio;
use crate::content::{ArtKind, Band, Phase};
use crate::layout;
use crate::style;
use crate::view::{self, scenes};
use eframe::egui;

struct BandColors {
    fill: egui::Color32,
    title: egui::Color32,
    subtitle: egui::Color32,
    body: egui::Color32,
    pill_fill: egui::Color32,
    pill_text: egui::Color32,
    pill_stroke: egui::Color32,
}

fn band_colors(band: Band) -> BandColors {
    match band {
        Band::Light => BandColors {
            fill: egui::Color32::WHITE,
            title: style::STONE_900,
            subtitle: style::STONE_500,
            body: style::STONE_600,
            pill_fill: style::STONE_50,
            pill_text: style::GOLD,
            pill_stroke: style::STONE_200,
        },
        Band::Dim => BandColors {
            fill: style::PARCHMENT_DIM,
            title: style::STONE_900,
            subtitle: style::STONE_500,
            body: style::STONE_600,
            pill_fill: egui::Color32::WHITE,
            pill_text: style::STONE_900,
            pill_stroke: style::STONE_200,
        },
        Band::Dark => BandColors {
            fill: style::STONE_900,
            title: egui::Color32::WHITE,
            subtitle: style::STONE_400,
            body: style::STONE_400,
            pill_fill: style::STONE_800,
            pill_text: style::GOLD,
            pill_stroke: style::STONE_700,
        },
    }
}

impl Zillio {
    pub(crate) fn render_phase(
        &mut self,
        ui: &mut egui::Ui,
        phase: &'static Phase,
        narrow: bool,
        time: f64,
    ) -> egui::Rect {
        let colors = band_colors(phase.band);

        let response = egui::Frame::new()
            .fill(colors.fill)
            .inner_margin(egui::Margin::symmetric(0, layout::SECTION_PADDING))
            .show(ui, |ui| {
                view::centered_column(ui, |ui| {
                    if narrow {
                        phase_art(ui, phase, time);
                        ui.add_space(24.0);
                        phase_copy(ui, phase, &colors);
                    } else {
                        ui.spacing_mut().item_spacing.x = layout::COLUMN_GAP;
                        ui.columns(2, |cols| {
                            if phase.art_on_left {
                                phase_art(&mut cols[0], phase, time);
                                phase_copy(&mut cols[1], phase, &colors);
                            } else {
                                phase_copy(&mut cols[0], phase, &colors);
                                phase_art(&mut cols[1], phase, time);
                            }
                        });
                    }
                });
            });

        response.response.rect
    }
}

fn phase_art(ui: &mut egui::Ui, phase: &Phase, time: f64) {
    let width = ui.available_width();
    let ratio = match phase.art {
        ArtKind::Network => 1.2,
        ArtKind::CapitalMap => 0.9,
        ArtKind::Growth => 0.72,
    };
    let height = (width * ratio).min(540.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

    match phase.art {
        ArtKind::Network => scenes::network::paint(ui.painter(), rect, time),
        ArtKind::CapitalMap => scenes::capital_map::paint(ui.painter(), rect, time),
        ArtKind::Growth => scenes::growth::paint(ui.painter(), rect, time),
    }
}

fn phase_copy(ui: &mut egui::Ui, phase: &Phase, colors: &BandColors) {
    ui.spacing_mut().item_spacing = egui::vec2(8.0, 10.0);

    let pill = egui::Frame::new()
        .fill(colors.pill_fill)
        .stroke(egui::Stroke::new(1.0, colors.pill_stroke))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(12, 4));
    pill.show(ui, |ui| {
        ui.label(style::eyebrow(phase.eyebrow, colors.pill_text));
    });
    ui.add_space(8.0);

    ui.label(style::section_title(phase.title, colors.title));
    ui.label(style::section_subtitle(phase.subtitle, colors.subtitle));

    if phase.show_rule {
        ui.add_space(10.0);
        let (rule, _) = ui.allocate_exact_size(egui::vec2(64.0, 4.0), egui::Sense::hover());
        ui.painter().rect_filled(rule, 2, style::GOLD);
    }
    ui.add_space(10.0);

    for paragraph in &phase.paragraphs {
        ui.label(style::body_text(paragraph, colors.body));
        ui.add_space(6.0);
    }
}
