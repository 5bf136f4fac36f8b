// Input handling for the Zillio brochure
// Keyboard shortcuts; clicks are handled where the widgets are rendered.

use crate::app::Zillio;
use crate::content::SectionId;
use eframe::egui;

impl Zillio {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // 1. Menu overlay: Escape dismisses it and nothing else fires.
        if self.nav.menu_open() {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.nav.close_menu();
            }
            return;
        }

        // 2. Section shortcuts
        let jump = ctx.input(|i| {
            if i.key_pressed(egui::Key::Num1) {
                Some(SectionId::Awakening)
            } else if i.key_pressed(egui::Key::Num2) {
                Some(SectionId::Audit)
            } else if i.key_pressed(egui::Key::Num3) {
                Some(SectionId::Amplification)
            } else if i.key_pressed(egui::Key::Num4) {
                Some(SectionId::Industries)
            } else if i.key_pressed(egui::Key::Num5) || i.key_pressed(egui::Key::End) {
                Some(SectionId::Contact)
            } else {
                None
            }
        });
        if let Some(id) = jump {
            self.navigate_to(id);
            return;
        }

        // 3. Back to the top
        if ctx.input(|i| i.key_pressed(egui::Key::Home)) {
            self.nav.scroll_to_top();
        }
    }
}
