// Layout constants for the Zillio brochure

use eframe::egui;

// --- Navigation ---
pub const NAV_SOLID_THRESHOLD: f32 = 50.0;
pub const SECTION_HEADER_OFFSET: f32 = 100.0;
pub const NAV_BAR_HEIGHT: f32 = 64.0;
pub const NARROW_BREAKPOINT: f32 = 768.0;

// --- Page ---
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub const PAGE_MARGIN: f32 = 24.0;
pub const SECTION_PADDING: i8 = 96;
pub const COLUMN_GAP: f32 = 32.0;

// --- Cards ---
pub const CARD_MIN_HEIGHT: f32 = 400.0;
pub const CARD_PADDING: i8 = 24;
pub const CARD_FADE_SECS: f64 = 0.5;

// --- Timing ---
pub const SCROLL_ANIMATION_MS_DEFAULT: u64 = 450;
pub const SCROLL_HINT_PERIOD_SECS: f64 = 2.0;

// --- Helper functions ---

/// Width of the centered content column for a given available width.
pub fn content_width(available: f32) -> f32 {
    (available - 2.0 * PAGE_MARGIN).min(CONTENT_MAX_WIDTH)
}

/// True when the viewport is too narrow for the desktop nav links.
pub fn is_narrow(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.screen_rect().width()) < NARROW_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width_clamps_to_max() {
        assert_eq!(content_width(4000.0), CONTENT_MAX_WIDTH);
        assert_eq!(content_width(600.0), 600.0 - 2.0 * PAGE_MARGIN);
    }
}
