// Amplification graph: fragmented streams converging into one beam,
// with the exponential curve underneath

use crate::style;
use eframe::egui;

const STREAM_COUNT: usize = 7;
const CURVE_SAMPLES: usize = 40;

pub fn paint(painter: &egui::Painter, rect: egui::Rect, time: f64) {
    painter.rect_filled(rect, 12, egui::Color32::from_rgb(23, 21, 20));
    painter.rect_stroke(
        rect,
        12,
        egui::Stroke::new(1.0, style::STONE_800),
        egui::StrokeKind::Inside,
    );

    let inner = rect.shrink(26.0);
    let focus = egui::pos2(
        inner.left() + inner.width() * 0.62,
        inner.center().y,
    );

    // Fragmented income streams bending into the focal point.
    for i in 0..STREAM_COUNT {
        let y0 = inner.top() + (i as f32 + 0.5) / STREAM_COUNT as f32 * inner.height();
        let sway = ((time + i as f64 * 0.9).sin() * 3.0) as f32;
        let points: Vec<egui::Pos2> = (0..=24)
            .map(|s| {
                let t = s as f32 / 24.0;
                let blend = t * t * (3.0 - 2.0 * t);
                let x = egui::lerp(inner.left()..=focus.x, t);
                let y = egui::lerp(y0 + sway..=focus.y, blend);
                egui::pos2(x, y)
            })
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(1.0, style::STONE_600),
        ));
    }

    // The amplified beam: a pulsing gold line with a soft halo.
    let beat = (time * 2.0).sin() as f32;
    let beam_end = egui::pos2(inner.right(), focus.y);
    painter.line_segment(
        [focus, beam_end],
        egui::Stroke::new(
            14.0 + beat * 3.0,
            egui::Color32::from_rgba_unmultiplied(184, 134, 11, 40),
        ),
    );
    painter.line_segment(
        [focus, beam_end],
        egui::Stroke::new(5.0 + beat, style::GOLD),
    );
    painter.circle_filled(focus, 6.0 + beat * 1.5, style::GOLD);

    // Exponential reference curve along the lower half.
    let e3 = 3.0_f32.exp() - 1.0;
    let curve: Vec<egui::Pos2> = (0..=CURVE_SAMPLES)
        .map(|s| {
            let u = s as f32 / CURVE_SAMPLES as f32;
            let rise = ((3.0 * u).exp() - 1.0) / e3;
            egui::pos2(
                egui::lerp(inner.left()..=inner.right(), u),
                inner.bottom() - rise * inner.height() * 0.45,
            )
        })
        .collect();
    painter.add(egui::Shape::line(
        curve,
        egui::Stroke::new(1.5, style::GOLD_SOFT),
    ));

    painter.text(
        focus + egui::vec2(24.0, -20.0),
        egui::Align2::LEFT_BOTTOM,
        "138×",
        egui::FontId::proportional(22.0),
        style::GOLD,
    );
    painter.text(
        egui::pos2(inner.left(), inner.top()),
        egui::Align2::LEFT_TOP,
        "FRAGMENTED INPUT",
        egui::FontId::proportional(9.0),
        style::STONE_500,
    );
    painter.text(
        egui::pos2(inner.right(), focus.y - 16.0),
        egui::Align2::RIGHT_BOTTOM,
        "REALIZED VALUE",
        egui::FontId::proportional(9.0),
        style::STONE_500,
    );
}
