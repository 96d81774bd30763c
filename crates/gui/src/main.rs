mod app;
mod canvas;
mod ui;

// Re-export library modules so that `crate::state` resolves to the lib
// crate types everywhere in the binary.
pub use koch_gui_lib::state;

use app::KochApp;
use state::Overrides;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "koch_gui=info".into()),
        )
        .init();

    // Parse --depth / --faces arguments
    let overrides = parse_args();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Koch Snowflake")
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "koch-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(KochApp::new(cc, overrides)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_args() -> Overrides {
    let args: Vec<String> = std::env::args().collect();
    let mut overrides = Overrides::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" if i + 1 < args.len() => {
                match args[i + 1].parse::<u32>() {
                    Ok(depth) => overrides.depth = Some(depth),
                    Err(e) => tracing::error!("Invalid --depth value {}: {e}", args[i + 1]),
                }
                i += 1;
            }
            "--faces" if i + 1 < args.len() => {
                match args[i + 1].parse::<u32>() {
                    Ok(faces) => overrides.faces = Some(faces),
                    Err(e) => tracing::error!("Invalid --faces value {}: {e}", args[i + 1]),
                }
                i += 1;
            }
            other => tracing::warn!("Ignoring unknown argument {other}"),
        }
        i += 1;
    }
    overrides
}
