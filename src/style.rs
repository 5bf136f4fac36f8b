use eframe::egui;

// --- Palette ---
// Parchment neutrals with a dark-goldenrod accent.
pub const PARCHMENT: egui::Color32 = egui::Color32::from_rgb(249, 248, 244);
pub const PARCHMENT_DIM: egui::Color32 = egui::Color32::from_rgb(245, 244, 240);
pub const GOLD: egui::Color32 = egui::Color32::from_rgb(184, 134, 11);
pub const GOLD_SOFT: egui::Color32 = egui::Color32::from_rgb(214, 178, 94);

pub const STONE_50: egui::Color32 = egui::Color32::from_rgb(250, 250, 249);
pub const STONE_100: egui::Color32 = egui::Color32::from_rgb(245, 245, 244);
pub const STONE_200: egui::Color32 = egui::Color32::from_rgb(231, 229, 228);
pub const STONE_400: egui::Color32 = egui::Color32::from_rgb(168, 162, 158);
pub const STONE_500: egui::Color32 = egui::Color32::from_rgb(120, 113, 108);
pub const STONE_600: egui::Color32 = egui::Color32::from_rgb(87, 83, 78);
pub const STONE_700: egui::Color32 = egui::Color32::from_rgb(68, 64, 60);
pub const STONE_800: egui::Color32 = egui::Color32::from_rgb(41, 37, 36);
pub const STONE_900: egui::Color32 = egui::Color32::from_rgb(28, 25, 23);

pub const ROSE_TINT: egui::Color32 = egui::Color32::from_rgb(254, 246, 246);
pub const ROSE_BORDER: egui::Color32 = egui::Color32::from_rgb(254, 226, 226);
pub const RED_MUTED: egui::Color32 = egui::Color32::from_rgb(127, 49, 49);

// --- Text sizes ---
pub const EYEBROW_SIZE: f32 = 11.0;
pub const BODY_SIZE: f32 = 16.0;
pub const SUBTITLE_SIZE: f32 = 20.0;
pub const TITLE_SIZE: f32 = 40.0;
pub const HERO_TITLE_SIZE: f32 = 72.0;

// --- Helper functions ---

/// Small bold uppercase label used for eyebrows and nav links.
pub fn eyebrow(text: &str, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(text).size(EYEBROW_SIZE).strong().color(color)
}

pub fn section_title(text: &str, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(text).size(TITLE_SIZE).color(color)
}

pub fn section_subtitle(text: &str, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(text).size(SUBTITLE_SIZE).italics().color(color)
}

pub fn body_text(text: &str, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(text).size(BODY_SIZE).color(color)
}

/// Render a clickable text label with a pointer cursor.
pub fn link_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).sense(egui::Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
