// Capital cartography: contour rings, profit-center nodes, and dashed
// trade routes on a parchment field

use crate::style;
use eframe::egui;

struct MapNode {
    label: &'static str,
    x: f32,
    y: f32,
    weight: f32,
}

static NODES: [MapNode; 6] = [
    MapNode { label: "FLAGSHIP", x: 0.30, y: 0.30, weight: 1.0 },
    MapNode { label: "RETAIL", x: 0.72, y: 0.22, weight: 0.6 },
    MapNode { label: "EXPORTS", x: 0.80, y: 0.58, weight: 0.8 },
    MapNode { label: "LICENSING", x: 0.52, y: 0.78, weight: 0.5 },
    MapNode { label: "DORMANT", x: 0.18, y: 0.68, weight: 0.7 },
    MapNode { label: "VENTURES", x: 0.50, y: 0.48, weight: 0.9 },
];

static ROUTES: [(usize, usize); 6] = [(0, 5), (1, 5), (2, 5), (3, 5), (4, 5), (0, 4)];

pub fn paint(painter: &egui::Painter, rect: egui::Rect, time: f64) {
    painter.rect_filled(rect, 12, style::PARCHMENT_DIM);
    painter.rect_stroke(
        rect,
        12,
        egui::Stroke::new(1.0, style::STONE_200),
        egui::StrokeKind::Inside,
    );

    let inner = rect.shrink(30.0);
    let at = |node: &MapNode| {
        egui::pos2(
            egui::lerp(inner.left()..=inner.right(), node.x),
            egui::lerp(inner.top()..=inner.bottom(), node.y),
        )
    };

    // Topography: concentric contour rings around the heavier centers.
    for node in &NODES {
        let center = at(node);
        let rings = (node.weight * 4.0) as usize + 1;
        for r in 1..=rings {
            painter.circle_stroke(
                center,
                r as f32 * 14.0,
                egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgba_unmultiplied(168, 162, 158, 36),
                ),
            );
        }
    }

    // Trade routes between centers.
    for (a, b) in &ROUTES {
        let shapes = egui::Shape::dashed_line(
            &[at(&NODES[*a]), at(&NODES[*b])],
            egui::Stroke::new(1.0, style::GOLD_SOFT),
            6.0,
            5.0,
        );
        painter.extend(shapes);
    }

    // Profit centers, weight-sized; the hub breathes slowly.
    for (idx, node) in NODES.iter().enumerate() {
        let center = at(node);
        let mut radius = 3.0 + node.weight * 4.0;
        if idx == 5 {
            radius += (time * 1.6).sin() as f32 * 1.5;
        }
        painter.circle_filled(center, radius, style::GOLD);
        painter.circle_stroke(
            center,
            radius + 3.0,
            egui::Stroke::new(1.0, style::GOLD_SOFT),
        );
        painter.text(
            center + egui::vec2(0.0, radius + 6.0),
            egui::Align2::CENTER_TOP,
            node.label,
            egui::FontId::proportional(9.0),
            style::STONE_600,
        );
    }
}
