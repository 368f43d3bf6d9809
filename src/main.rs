// Prevents an additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(e) = holiday_calendar::run() {
        holiday_calendar::core::logging::init(false);
        tracing::error!("Holiday Calendar stopped: {}", e);
        std::process::exit(1);
    }
}
