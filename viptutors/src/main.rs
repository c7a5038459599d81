//! VIPTUTORS desktop client entry point.

use viptutors::core::AppConfig;
use viptutors::utils::runtime::build_runtime;
use viptutors::{debug, App, Result};

const WINDOW_TITLE: &str = "VIPTUTORS";

fn main() -> Result<()> {
    let _log_guard = debug::init();
    if debug::is_debug_mode() {
        tracing::info!("Debug mode enabled");
    }

    let config = AppConfig::from_env();
    tracing::info!(
        sign_in_delay_ms = config.sign_in_delay.as_millis() as u64,
        theme_file = %config.theme_file.display(),
        "Starting VIPTUTORS client"
    );

    // Background tasks are spawned from egui callbacks on this thread
    let runtime = build_runtime()?;
    let _enter = runtime.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([480.0, 820.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(&config)))),
    )?;

    tracing::info!("Window closed, shutting down");
    Ok(())
}
