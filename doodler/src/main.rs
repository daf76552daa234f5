#![warn(clippy::pedantic)]

pub mod global;
pub mod pen_tools;
pub mod renderer;
pub mod ui;
pub mod window;

#[cfg(all(feature = "jemallocator", not(target_env = "msvc")))]
#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use anyhow::Result as AnyResult;

fn main() -> AnyResult<()> {
    let has_term = std::io::IsTerminal::is_terminal(&std::io::stdin());
    // Log to a terminal, if available. Else, log to "log.out" in the working directory.
    if has_term {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        let _ = simple_logging::log_to_file("log.out", log::LevelFilter::Debug);
    }

    let (preferences, status) = global::Preferences::load();
    // Only write defaults out if there was nothing there. A broken file is the user's to fix.
    if status == global::preferences::LoadStatus::Missing {
        if let Err(e) = preferences.save() {
            log::warn!("Failed to save default preferences:\n{e:?}");
        }
    }
    log::debug!("{preferences:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Doodler")
            .with_inner_size(preferences.window_size)
            .with_min_inner_size(global::Preferences::min_window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Doodler",
        options,
        Box::new(move |cc| Box::new(window::DoodleApp::new(cc, &preferences))),
    )
    .map_err(|e| anyhow::anyhow!("event loop exited with error: {e}"))
}
