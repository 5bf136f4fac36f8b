// Call-to-action band

use crate::app::Zillio;
use crate::content;
use crate::layout;
use crate::style;
use eframe::egui;

impl Zillio {
    pub(crate) fn render_cta(&mut self, ui: &mut egui::Ui) -> egui::Rect {
        let response = egui::Frame::new()
            .fill(style::PARCHMENT_DIM)
            .inner_margin(egui::Margin::symmetric(0, layout::SECTION_PADDING))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                    ui.label(
                        egui::RichText::new(content::CTA_TITLE)
                            .size(style::TITLE_SIZE)
                            .color(style::STONE_900),
                    );
                    ui.add_space(24.0);

                    let button = egui::Button::new(
                        egui::RichText::new(content::CTA_BUTTON)
                            .size(13.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    )
                    .fill(style::STONE_900)
                    .corner_radius(egui::CornerRadius::same(26))
                    .min_size(egui::vec2(260.0, 52.0));

                    if ui
                        .add(button)
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked()
                    {
                        if let Err(e) = open::that(content::PARTNER_URL) {
                            log::warn!("failed to open partner link: {e}");
                        }
                    }
                });
            });

        // Hairline separating the CTA from the diagnostics band above.
        let rect = response.response.rect;
        ui.painter().line_segment(
            [rect.left_top(), rect.right_top()],
            egui::Stroke::new(1.0, style::STONE_200),
        );

        rect
    }
}
