pub mod calendar;
pub mod core;
pub mod holidays;
pub mod ui;
pub mod utils;

use crate::core::app_state::AppContext;
use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::ui::tray::TrayController;
use std::sync::Arc;
use tauri::{Manager, RunEvent};
use tracing::{info, warn};

/// Loads the configuration, starts the tray and runs the event loop until Quit
pub fn run() -> Result<()> {
    let config = tauri::async_runtime::block_on(AppConfig::load())?;
    crate::core::logging::init(config.advanced.debug_logging);
    config.validate()?;

    info!("Starting Holiday Calendar");

    let app = tauri::Builder::default()
        .system_tray(TrayController::create_tray_menu())
        .on_system_tray_event(|app, event| {
            let app_handle = app.clone();
            tauri::async_runtime::spawn(async move {
                let Some(context) = app_handle.try_state::<AppContext>() else {
                    warn!("Tray event before initialization finished");
                    return;
                };
                let tray = Arc::clone(&context.tray);
                let tray = tray.read().await;
                if let Err(e) = tray.handle_tray_event(event).await {
                    tray.report_error(&e);
                }
            });
        })
        .invoke_handler(tauri::generate_handler![
            ui::commands::select_date,
            ui::commands::current_label,
            ui::commands::visible_months,
            ui::commands::shift_months,
        ])
        .setup(move |app| {
            let controller = TrayController::initialize(&app.handle(), &config)?;
            app.manage(AppContext::new(config, controller));
            info!("Holiday Calendar initialized successfully");
            Ok(())
        })
        .build(tauri::generate_context!())?;

    app.run(|_app_handle, event| {
        // The tray outlives the window; only Quit ends the process
        if let RunEvent::ExitRequested { api, .. } = event {
            api.prevent_exit();
        }
    });

    Ok(())
}
