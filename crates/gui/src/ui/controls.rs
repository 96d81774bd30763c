//! Top controls panel: depth, face count, stroke style.

use egui::Ui;
use koch_core::{Rgb, MAX_DEPTH, MIN_FACES};

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let spec = *state.snowflake.spec();

        ui.label("Depth:");
        if ui
            .add_enabled(spec.depth > 0, egui::Button::new("−"))
            .clicked()
        {
            state.flatten();
        }
        ui.monospace(format!("{}", spec.depth));
        if ui
            .add_enabled(spec.depth < MAX_DEPTH, egui::Button::new("+"))
            .clicked()
        {
            state.deepen();
        }

        ui.separator();

        ui.label("Faces:");
        if ui
            .add_enabled(spec.face_count > MIN_FACES, egui::Button::new("−"))
            .clicked()
        {
            state.remove_face();
        }
        ui.monospace(format!("{}", spec.face_count));
        if ui.button("+").clicked() {
            state.add_face();
        }

        ui.separator();

        ui.label("Stroke:");
        let mut width = spec.stroke_width;
        if ui
            .add(
                egui::DragValue::new(&mut width)
                    .speed(0.1)
                    .range(0.5..=8.0),
            )
            .changed()
        {
            state.set_stroke_width(width);
        }

        let mut rgb = spec.color.0;
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            state.set_color(Rgb(rgb));
        }

        ui.separator();

        if ui.button("Reset").clicked() {
            state.reset();
        }
    });
}
