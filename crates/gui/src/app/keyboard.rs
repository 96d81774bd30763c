//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Up/Down — recursion depth
        if i.key_pressed(egui::Key::ArrowUp) {
            state.deepen();
        }
        if i.key_pressed(egui::Key::ArrowDown) {
            state.flatten();
        }
        // Right/Left — polygon face count
        if i.key_pressed(egui::Key::ArrowRight) {
            state.add_face();
        }
        if i.key_pressed(egui::Key::ArrowLeft) {
            state.remove_face();
        }
        // R — reset to defaults
        if i.key_pressed(egui::Key::R) && !i.modifiers.command {
            state.reset();
        }
    });
}
