pub mod commands;
pub mod panel;
pub mod tray;

// Re-export commonly used types
pub use panel::CalendarWindow;
pub use tray::{CalendarSurface, MenuAction, TrayController};
