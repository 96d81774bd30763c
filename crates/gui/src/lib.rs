// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui, canvas) remain in the binary crate.

pub mod harness;
pub mod state;
