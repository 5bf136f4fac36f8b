// Navigation bar and the narrow-viewport menu overlay
// The bar floats above the page and switches between a transparent look
// over the hero and an opaque look once the page has scrolled.

use crate::app::Zillio;
use crate::content::SectionId;
use crate::layout;
use crate::style;
use eframe::egui;

impl Zillio {
    pub(crate) fn render_navbar(&mut self, ctx: &egui::Context, narrow: bool) {
        let screen = ctx.screen_rect();
        let scrolled = self.scroll.past_threshold();

        // Clicks are applied after the Area closes; the closure only
        // borrows the navigator read-only.
        let mut go: Option<SectionId> = None;
        let mut to_top = false;
        let mut toggle_menu = false;

        let link_color = if scrolled {
            style::STONE_600
        } else {
            egui::Color32::WHITE
        };
        let brand_color = if scrolled {
            style::STONE_900
        } else {
            egui::Color32::WHITE
        };
        let menu_open = self.nav.menu_open();

        egui::Area::new(egui::Id::new("navbar"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let bar_rect = egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(screen.width(), layout::NAV_BAR_HEIGHT),
                );

                if scrolled {
                    ui.painter().rect_filled(
                        bar_rect,
                        0,
                        egui::Color32::from_rgba_unmultiplied(249, 248, 244, 235),
                    );
                    ui.painter().line_segment(
                        [bar_rect.left_bottom(), bar_rect.right_bottom()],
                        egui::Stroke::new(1.0, style::STONE_200),
                    );
                }

                let inner = bar_rect.shrink2(egui::vec2(layout::PAGE_MARGIN, 0.0));
                ui.scope_builder(
                    egui::UiBuilder::new()
                        .max_rect(inner)
                        .layout(egui::Layout::left_to_right(egui::Align::Center)),
                    |ui| {
                        // Logo disc + wordmark; both scroll back to the top.
                        let (disc_rect, disc_resp) = ui
                            .allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::click());
                        let disc_fill = if scrolled {
                            style::STONE_900
                        } else {
                            egui::Color32::from_white_alpha(40)
                        };
                        let z_color = if scrolled {
                            style::GOLD
                        } else {
                            egui::Color32::WHITE
                        };
                        ui.painter().circle_filled(disc_rect.center(), 16.0, disc_fill);
                        ui.painter().text(
                            disc_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            "Z",
                            egui::FontId::proportional(18.0),
                            z_color,
                        );
                        ui.add_space(8.0);

                        let word = style::link_label(
                            ui,
                            egui::RichText::new("ZILLIO IND.")
                                .size(16.0)
                                .strong()
                                .color(brand_color),
                        );
                        if disc_resp.clicked() || word.clicked() {
                            to_top = true;
                        }

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if narrow {
                                    let icon = if menu_open { "✕" } else { "☰" };
                                    let burger = ui.add(
                                        egui::Button::new(
                                            egui::RichText::new(icon)
                                                .size(18.0)
                                                .color(brand_color),
                                        )
                                        .frame(false),
                                    );
                                    if burger.clicked() {
                                        toggle_menu = true;
                                    }
                                } else {
                                    // Right-to-left: the Partner pill hugs the
                                    // edge, then the links in reverse order.
                                    let pill_fill = if scrolled {
                                        style::STONE_900
                                    } else {
                                        egui::Color32::from_white_alpha(40)
                                    };
                                    let pill = egui::Button::new(
                                        egui::RichText::new(SectionId::Contact.nav_label())
                                            .size(style::EYEBROW_SIZE)
                                            .strong()
                                            .color(egui::Color32::WHITE),
                                    )
                                    .fill(pill_fill)
                                    .corner_radius(egui::CornerRadius::same(16))
                                    .min_size(egui::vec2(96.0, 32.0));
                                    if ui.add(pill).clicked() {
                                        go = Some(SectionId::Contact);
                                    }

                                    for id in SectionId::NAV.iter().rev() {
                                        ui.add_space(16.0);
                                        let link = style::link_label(
                                            ui,
                                            style::eyebrow(id.nav_label(), link_color),
                                        );
                                        if link.clicked() {
                                            go = Some(*id);
                                        }
                                    }
                                }
                            },
                        );
                    },
                );
            });

        if toggle_menu {
            self.nav.toggle_menu();
        }
        if to_top {
            self.nav.scroll_to_top();
        }
        if let Some(id) = go {
            self.navigate_to(id);
        }
    }

    /// Full-screen menu for narrow viewports. Sits under the bar so the
    /// hamburger stays reachable as a close button.
    pub(crate) fn render_menu_overlay(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        let mut go: Option<SectionId> = None;

        egui::Area::new(egui::Id::new("menu_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                // Swallow clicks so the page underneath stays inert.
                ui.allocate_rect(screen, egui::Sense::click());
                ui.painter().rect_filled(screen, 0, style::PARCHMENT);

                let line_height = 48.0;
                let block = SectionId::NAV.len() as f32 * line_height;
                ui.scope_builder(
                    egui::UiBuilder::new()
                        .max_rect(screen)
                        .layout(egui::Layout::top_down(egui::Align::Center)),
                    |ui| {
                        ui.add_space(
                            ((screen.height() - block) / 2.0).max(layout::NAV_BAR_HEIGHT),
                        );
                        for id in SectionId::NAV {
                            let link = style::link_label(
                                ui,
                                egui::RichText::new(id.menu_label())
                                    .size(22.0)
                                    .color(style::STONE_900),
                            );
                            if link.clicked() {
                                go = Some(id);
                            }
                            ui.add_space(line_height - 22.0);
                        }
                    },
                );
            });

        if let Some(id) = go {
            self.navigate_to(id);
        }
    }
}
