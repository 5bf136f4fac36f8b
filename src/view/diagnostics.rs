// Sector diagnostics: the five-card grid with staggered fade-in

use crate::app::Zillio;
use crate::content::{self, DiagnosisCard, SectionId};
use crate::layout;
use crate::style;
use crate::view;
use eframe::egui;

impl Zillio {
    pub(crate) fn render_diagnostics(
        &mut self,
        ui: &mut egui::Ui,
        narrow: bool,
        time: f64,
    ) -> egui::Rect {
        let mut view_reports = false;

        let response = egui::Frame::new()
            .fill(egui::Color32::WHITE)
            .inner_margin(egui::Margin::symmetric(0, layout::SECTION_PADDING))
            .show(ui, |ui| {
                view::centered_column(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                        ui.label(style::eyebrow(
                            content::DIAGNOSTICS_EYEBROW,
                            style::STONE_500,
                        ));
                        ui.label(
                            egui::RichText::new(content::DIAGNOSTICS_TITLE)
                                .size(48.0)
                                .color(style::STONE_900),
                        );
                        ui.scope(|ui| {
                            ui.set_max_width(720.0_f32.min(ui.available_width()));
                            ui.label(
                                egui::RichText::new(content::DIAGNOSTICS_INTRO)
                                    .size(style::BODY_SIZE)
                                    .italics()
                                    .color(style::STONE_600),
                            );
                        });
                    });
                    ui.add_space(48.0);

                    // The fade-in clock starts the first time the grid
                    // reaches the visible part of the scroll area.
                    if self.cards_revealed_at.is_none()
                        && ui.cursor().min.y < ui.clip_rect().bottom()
                    {
                        self.cards_revealed_at = Some(time);
                    }
                    let revealed_at = self.cards_revealed_at;

                    if narrow {
                        for card in &content::DIAGNOSIS_CARDS {
                            draw_card(ui, card, card_alpha(revealed_at, card.delay, time));
                            ui.add_space(16.0);
                        }
                    } else {
                        ui.spacing_mut().item_spacing.x = 20.0;
                        ui.columns(3, |cols| {
                            for (col, card) in
                                cols.iter_mut().zip(&content::DIAGNOSIS_CARDS[..3])
                            {
                                draw_card(col, card, card_alpha(revealed_at, card.delay, time));
                            }
                        });
                        ui.add_space(20.0);

                        // Bottom row: two cards, centered at two thirds width.
                        let width = ui.available_width();
                        let inner = width * 2.0 / 3.0;
                        ui.horizontal(|ui| {
                            ui.add_space((width - inner) / 2.0);
                            ui.vertical(|ui| {
                                ui.set_width(inner);
                                ui.columns(2, |cols| {
                                    for (col, card) in
                                        cols.iter_mut().zip(&content::DIAGNOSIS_CARDS[3..])
                                    {
                                        draw_card(
                                            col,
                                            card,
                                            card_alpha(revealed_at, card.delay, time),
                                        );
                                    }
                                });
                            });
                        });
                    }

                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        let trailer = style::link_label(
                            ui,
                            style::eyebrow(content::DIAGNOSTICS_TRAILER, style::STONE_400),
                        );
                        if trailer.clicked() {
                            view_reports = true;
                        }
                    });
                });
            });

        if view_reports {
            self.navigate_to(SectionId::Contact);
        }

        response.response.rect
    }
}

/// Opacity of a card `delay` seconds into the staggered reveal.
fn card_alpha(revealed_at: Option<f64>, delay: f64, now: f64) -> f32 {
    match revealed_at {
        Some(t0) => ((now - t0 - delay) / layout::CARD_FADE_SECS).clamp(0.0, 1.0) as f32,
        None => 0.0,
    }
}

fn draw_card(ui: &mut egui::Ui, card: &DiagnosisCard, alpha: f32) {
    ui.scope(|ui| {
        ui.set_opacity(alpha);
        // Slide up as the card fades in.
        ui.add_space((1.0 - alpha) * 12.0);

        let response = egui::Frame::new()
            .fill(egui::Color32::WHITE)
            .stroke(egui::Stroke::new(1.0, style::STONE_200))
            .corner_radius(egui::CornerRadius::same(18))
            .inner_margin(egui::Margin::same(layout::CARD_PADDING))
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                ui.set_min_height(layout::CARD_MIN_HEIGHT);

                ui.label(style::eyebrow(card.sub, style::STONE_500));
                ui.label(
                    egui::RichText::new(card.title)
                        .size(24.0)
                        .color(style::STONE_900),
                );
                ui.add_space(10.0);

                symptom_block(ui, card.symptom);
                cure_block(ui, card.cure);

                // Pin the impact row to the bottom of the card.
                let used = ui.min_rect().height();
                let slack = layout::CARD_MIN_HEIGHT - used - 48.0;
                if slack > 0.0 {
                    ui.add_space(slack);
                }
                ui.separator();
                ui.label(
                    egui::RichText::new(content::IMPACT_HEADING)
                        .size(9.0)
                        .color(style::STONE_400),
                );
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(card.impact)
                            .size(14.0)
                            .strong()
                            .color(style::STONE_900),
                    );
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(28.0, 28.0),
                                egui::Sense::hover(),
                            );
                            ui.painter().circle_filled(
                                rect.center(),
                                14.0,
                                style::STONE_50,
                            );
                            ui.painter().circle_stroke(
                                rect.center(),
                                14.0,
                                egui::Stroke::new(1.0, style::STONE_200),
                            );
                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                "→",
                                egui::FontId::proportional(13.0),
                                style::STONE_900,
                            );
                        },
                    );
                });
            });

        // Hover reveal: the gold accent bar along the left edge.
        let rect = response.response.rect;
        if ui.rect_contains_pointer(rect) {
            ui.painter().rect_filled(
                egui::Rect::from_min_max(
                    rect.left_top(),
                    egui::pos2(rect.left() + 3.0, rect.bottom()),
                ),
                0,
                style::GOLD,
            );
        }
    });
}

fn symptom_block(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(style::ROSE_TINT)
        .stroke(egui::Stroke::new(1.0, style::ROSE_BORDER))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("⚠")
                        .size(12.0)
                        .color(style::RED_MUTED),
                );
                ui.label(
                    egui::RichText::new(content::SYMPTOM_HEADING)
                        .size(9.0)
                        .strong()
                        .color(style::STONE_400),
                );
            });
            ui.label(
                egui::RichText::new(format!("\u{201c}{text}\u{201d}"))
                    .size(13.0)
                    .italics()
                    .color(style::STONE_600),
            );
        });
}

fn cure_block(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(style::STONE_50)
        .stroke(egui::Stroke::new(1.0, style::STONE_100))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🔑").size(12.0).color(style::GOLD));
                ui.label(
                    egui::RichText::new(content::CURE_HEADING)
                        .size(9.0)
                        .strong()
                        .color(style::GOLD),
                );
            });
            ui.label(
                egui::RichText::new(text)
                    .size(13.0)
                    .color(style::STONE_800),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_are_hidden_before_reveal() {
        assert_eq!(card_alpha(None, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_card_alpha_respects_stagger() {
        // 0.25s into the reveal: an undelayed card is half faded, a card
        // delayed by 0.4s has not started.
        assert_eq!(card_alpha(Some(10.0), 0.0, 10.25), 0.5);
        assert_eq!(card_alpha(Some(10.0), 0.4, 10.25), 0.0);
        // Well past the reveal everything is opaque.
        assert_eq!(card_alpha(Some(10.0), 0.4, 12.0), 1.0);
    }
}
