use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let spec = state.snowflake.spec();

        ui.weak(format!("depth: {}", spec.depth));
        ui.separator();
        ui.weak(format!("faces: {}", spec.face_count));
        ui.separator();
        ui.weak(format!("segments: {}", state.snowflake.segments().len()));
        ui.separator();
        ui.weak("↑/↓ depth · ←/→ faces · R reset");

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("koch-gui v0.1");
        });
    });
}
