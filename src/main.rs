mod app;
mod config;
mod objects;
mod scenario;
mod session;
mod stage;
mod strings;
mod toolbar;
mod windows;

use app::EditorApp;
use config::AppConfig;
use session::EditorMode;

/// Picks the editor mode from the first CLI argument, then the environment,
/// defaulting to the full scenario editor.
fn resolve_editor_mode(cli: Option<&str>, env: Option<&str>) -> EditorMode {
    if let Some(mode) = cli.and_then(EditorMode::parse) {
        return mode;
    }
    if let Some(mode) = env.and_then(EditorMode::parse) {
        return mode;
    }
    EditorMode::ScenarioEditor
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();
    let cli_mode = std::env::args().nth(1);
    let env_mode = std::env::var("PARKEDIT_MODE").ok();
    let mode = resolve_editor_mode(cli_mode.as_deref(), env_mode.as_deref());

    let width = config.window_width.unwrap_or(1280.0);
    let height = config.window_height.unwrap_or(800.0);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Parkedit Scenario Editor")
            .with_app_id("parkedit")
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "parkedit",
        native_options,
        Box::new(move |cc| Ok(Box::new(EditorApp::new(cc, config, mode)))),
    )
}
