// Industrial network diagram: typed nodes over a faint grid, with
// pulses traveling along the connections into the core

use super::hash01;
use crate::style;
use eframe::egui;

#[derive(Clone, Copy, PartialEq)]
enum NodeKind {
    Core,
    Asset,
    Risk,
    Logistics,
}

struct NetNode {
    label: &'static str,
    x: f32,
    y: f32,
    kind: NodeKind,
}

static NODES: [NetNode; 9] = [
    NetNode { label: "CORE", x: 0.50, y: 0.46, kind: NodeKind::Core },
    NetNode { label: "LEGACY ERP", x: 0.18, y: 0.16, kind: NodeKind::Asset },
    NetNode { label: "WAREHOUSING", x: 0.80, y: 0.14, kind: NodeKind::Logistics },
    NetNode { label: "DORMANT DATA", x: 0.14, y: 0.52, kind: NodeKind::Asset },
    NetNode { label: "GREY ZONE", x: 0.84, y: 0.44, kind: NodeKind::Risk },
    NetNode { label: "FLEET", x: 0.24, y: 0.84, kind: NodeKind::Logistics },
    NetNode { label: "CAPITAL", x: 0.55, y: 0.88, kind: NodeKind::Asset },
    NetNode { label: "COMPLIANCE", x: 0.82, y: 0.76, kind: NodeKind::Risk },
    NetNode { label: "ARCHIVE", x: 0.42, y: 0.12, kind: NodeKind::Asset },
];

static LINKS: [(usize, usize); 8] = [
    (1, 0),
    (2, 0),
    (3, 0),
    (4, 0),
    (5, 0),
    (6, 0),
    (7, 0),
    (8, 0),
];

fn node_color(kind: NodeKind) -> egui::Color32 {
    match kind {
        NodeKind::Core => style::GOLD,
        NodeKind::Asset => style::STONE_200,
        NodeKind::Risk => egui::Color32::from_rgb(178, 90, 80),
        NodeKind::Logistics => egui::Color32::from_rgb(120, 150, 180),
    }
}

pub fn paint(painter: &egui::Painter, rect: egui::Rect, time: f64) {
    painter.rect_filled(rect, 12, egui::Color32::from_rgb(26, 26, 26));
    painter.rect_stroke(
        rect,
        12,
        egui::Stroke::new(1.0, style::STONE_800),
        egui::StrokeKind::Inside,
    );

    // Faint grid
    let grid = egui::Color32::from_white_alpha(6);
    for k in 1..6 {
        let t = k as f32 / 6.0;
        let x = egui::lerp(rect.left()..=rect.right(), t);
        let y = egui::lerp(rect.top()..=rect.bottom(), t);
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            egui::Stroke::new(1.0, grid),
        );
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            egui::Stroke::new(1.0, grid),
        );
    }

    let inner = rect.shrink(28.0);
    let at = |node: &NetNode| {
        egui::pos2(
            egui::lerp(inner.left()..=inner.right(), node.x),
            egui::lerp(inner.top()..=inner.bottom(), node.y),
        )
    };

    // Connections, each carrying a pulse drifting toward the core.
    for (idx, (a, b)) in LINKS.iter().enumerate() {
        let from = at(&NODES[*a]);
        let to = at(&NODES[*b]);
        painter.line_segment([from, to], egui::Stroke::new(1.0, style::STONE_700));

        let phase = (time as f32 * 0.18 + hash01(idx as f32)) % 1.0;
        let pulse = from + (to - from) * phase;
        painter.circle_filled(
            pulse,
            2.0,
            egui::Color32::from_rgba_unmultiplied(184, 134, 11, 180),
        );
    }

    for node in &NODES {
        let pos = at(node);
        let color = node_color(node.kind);
        if node.kind == NodeKind::Core {
            let beat = (time * 2.0).sin() as f32;
            painter.circle_filled(
                pos,
                14.0 + beat * 3.0,
                egui::Color32::from_rgba_unmultiplied(184, 134, 11, 40),
            );
            painter.circle_filled(pos, 8.0 + beat * 1.5, color);
        } else {
            painter.circle_filled(pos, 4.0, color);
        }
        painter.text(
            pos + egui::vec2(0.0, 12.0),
            egui::Align2::CENTER_TOP,
            node.label,
            egui::FontId::proportional(9.0),
            style::STONE_400,
        );
    }
}
