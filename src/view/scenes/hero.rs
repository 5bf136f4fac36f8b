// Hero backdrop: slow radial rays and rising motes over the gold field

use super::hash01;
use crate::style;
use eframe::egui;
use std::f32::consts::TAU;

const RAY_COUNT: usize = 14;
const MOTE_COUNT: usize = 60;

pub fn paint(painter: &egui::Painter, rect: egui::Rect, time: f64) {
    painter.rect_filled(rect, 0, style::GOLD);

    // Deeper band toward the bottom for contrast under the headline.
    let band = egui::Rect::from_min_max(
        egui::pos2(rect.left(), rect.top() + rect.height() * 0.6),
        rect.max,
    );
    painter.rect_filled(band, 0, egui::Color32::from_rgba_unmultiplied(92, 64, 2, 60));

    // Rays rotate imperceptibly slowly around a point above center.
    let center = rect.center() - egui::vec2(0.0, rect.height() * 0.12);
    let reach = rect.size().max_elem();
    for k in 0..RAY_COUNT {
        let angle = k as f32 * TAU / RAY_COUNT as f32 + time as f32 * 0.03;
        let dir = egui::vec2(angle.cos(), angle.sin());
        painter.line_segment(
            [center, center + dir * reach],
            egui::Stroke::new(
                22.0,
                egui::Color32::from_rgba_unmultiplied(255, 236, 190, 10),
            ),
        );
    }

    // Motes drift upward on individual speeds and restart at the bottom.
    let span = rect.height() + 40.0;
    for i in 0..MOTE_COUNT {
        let seed = i as f32;
        let x = rect.left() + hash01(seed) * rect.width();
        let speed = 12.0 + hash01(seed + 7.0) * 30.0;
        let y = rect.bottom() - (time as f32 * speed + hash01(seed + 3.0) * span) % span;
        let radius = 1.0 + hash01(seed + 11.0) * 2.2;
        let alpha = (30.0 + hash01(seed + 5.0) * 80.0) as u8;
        painter.circle_filled(
            egui::pos2(x, y),
            radius,
            egui::Color32::from_rgba_unmultiplied(255, 250, 235, alpha),
        );
    }

    // Soft vignette so the fixed nav bar stays readable over the hero.
    let top_band = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), 120.0));
    painter.rect_filled(top_band, 0, egui::Color32::from_black_alpha(40));
}
