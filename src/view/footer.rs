// Footer band

use crate::app::Zillio;
use crate::content;
use crate::style;
use crate::view;
use chrono::Datelike;
use eframe::egui;

impl Zillio {
    pub(crate) fn render_footer(&mut self, ui: &mut egui::Ui, narrow: bool) {
        egui::Frame::new()
            .fill(style::STONE_900)
            .inner_margin(egui::Margin::symmetric(0, 64))
            .show(ui, |ui| {
                view::centered_column(ui, |ui| {
                    if narrow {
                        ui.vertical_centered(|ui| {
                            brand_block(ui);
                            ui.add_space(16.0);
                            ui.horizontal_wrapped(|ui| {
                                footer_links(ui, false);
                            });
                        });
                    } else {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                brand_block(ui);
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    footer_links(ui, true);
                                },
                            );
                        });
                    }

                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        let year = chrono::Local::now().year();
                        ui.label(
                            egui::RichText::new(format!(
                                "© {year} {}",
                                content::FOOTER_COPYRIGHT
                            ))
                            .size(9.0)
                            .color(style::STONE_600),
                        );
                        if self.config.ui.show_keyboard_hints {
                            ui.add_space(6.0);
                            ui.label(
                                egui::RichText::new(
                                    "1-4 SECTIONS · 5 PARTNER · HOME TOP · ESC CLOSE MENU",
                                )
                                .size(9.0)
                                .color(style::STONE_700),
                            );
                        }
                    });
                });
            });
    }
}

fn brand_block(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new(content::FOOTER_BRAND)
            .size(22.0)
            .strong()
            .color(egui::Color32::WHITE),
    );
    ui.label(
        egui::RichText::new(content::FOOTER_SUBLINE)
            .size(11.0)
            .color(style::STONE_500),
    );
}

/// `reversed` flips iteration for right-to-left layouts so the visual
/// order stays Legal / Privacy / Contact.
fn footer_links(ui: &mut egui::Ui, reversed: bool) {
    let links: Vec<_> = if reversed {
        content::FOOTER_LINKS.iter().rev().collect()
    } else {
        content::FOOTER_LINKS.iter().collect()
    };
    for link in links {
        let label = style::link_label(ui, style::eyebrow(link.label, style::STONE_500));
        if label.clicked() {
            if let Err(e) = open::that(link.url) {
                log::warn!("failed to open {}: {e}", link.label);
            }
        }
        ui.add_space(16.0);
    }
}
