//! Central panel: draws the generated segments.
//!
//! The snowflake lives in world coordinates (y up); the panel fits its
//! bounding box into the available rect with a uniform scale and a y flip.

use eframe::egui;
use koch_core::{Point2D, Segment};

use crate::state::AppState;

pub struct CanvasPanel;

impl CanvasPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, ui: &mut egui::Ui, state: &AppState) {
        let rect = ui.available_rect_before_wrap();
        let painter = ui.painter_at(rect);

        let bg = state.settings.canvas.background_color;
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(bg[0], bg[1], bg[2]));

        let segments = state.snowflake.segments();
        if segments.is_empty() {
            return;
        }

        let to_screen = fit_transform(segments, rect, state.settings.canvas.margin);
        for seg in segments {
            let color = egui::Color32::from_rgb(seg.color.0[0], seg.color.0[1], seg.color.0[2]);
            let stroke = egui::Stroke::new(seg.stroke_width as f32, color);
            painter.line_segment([to_screen(seg.start), to_screen(seg.end)], stroke);
        }
    }
}

impl Default for CanvasPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform world-to-screen mapping: fit the segment bounding box into
/// `rect`, centered, with a relative margin and the y axis flipped.
fn fit_transform(
    segments: &[Segment],
    rect: egui::Rect,
    margin: f32,
) -> impl Fn(Point2D) -> egui::Pos2 {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for seg in segments {
        for p in [seg.start, seg.end] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
    }

    let world_w = (max_x - min_x).max(1e-9);
    let world_h = (max_y - min_y).max(1e-9);
    let world_cx = (min_x + max_x) / 2.0;
    let world_cy = (min_y + max_y) / 2.0;

    let avail = rect.shrink2(egui::vec2(rect.width() * margin, rect.height() * margin));
    let scale = (avail.width() as f64 / world_w).min(avail.height() as f64 / world_h);
    let center = avail.center();

    move |p: Point2D| {
        egui::pos2(
            center.x + ((p.x - world_cx) * scale) as f32,
            center.y - ((p.y - world_cy) * scale) as f32,
        )
    }
}
