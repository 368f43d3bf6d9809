use crate::core::config::UiConfig;
use crate::core::error::{CalendarError, Result};
use crate::ui::tray::CalendarSurface;
use tauri::{AppHandle, Manager, Window, WindowBuilder, WindowEvent, WindowUrl};

pub const CALENDAR_WINDOW_LABEL: &str = "calendar";
pub const LABEL_CHANGED_EVENT: &str = "label-changed";

/// The single calendar window, hidden instead of closed
pub struct CalendarWindow {
    window: Window,
}

impl CalendarWindow {
    /// Builds the window hidden; any existing window with the same label is reused
    pub fn create(app_handle: &AppHandle, ui: &UiConfig) -> Result<Self> {
        if let Some(window) = app_handle.get_window(CALENDAR_WINDOW_LABEL) {
            return Ok(Self { window });
        }

        let window = WindowBuilder::new(
            app_handle,
            CALENDAR_WINDOW_LABEL,
            WindowUrl::App("calendar.html".into()),
        )
        .title(&ui.window_title)
        .inner_size(ui.window_width, ui.window_height)
        .resizable(true)
        .visible(false)
        .center()
        .build()
        .map_err(|e| {
            CalendarError::WindowError(format!("Failed to create calendar window: {}", e))
        })?;

        // Closing only hides; the tray keeps the process alive
        let window_clone = window.clone();
        window.on_window_event(move |event| {
            if let WindowEvent::CloseRequested { api, .. } = event {
                api.prevent_close();
                let _ = window_clone.hide();
            }
        });

        Ok(Self { window })
    }
}

impl CalendarSurface for CalendarWindow {
    fn show(&self) -> Result<()> {
        self.window
            .show()
            .map_err(|e| CalendarError::WindowError(format!("Failed to show calendar: {}", e)))?;
        self.window
            .set_focus()
            .map_err(|e| CalendarError::WindowError(format!("Failed to focus calendar: {}", e)))?;
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        self.window
            .hide()
            .map_err(|e| CalendarError::WindowError(format!("Failed to hide calendar: {}", e)))
    }

    fn is_visible(&self) -> Result<bool> {
        self.window
            .is_visible()
            .map_err(|e| {
                CalendarError::WindowError(format!("Failed to query calendar visibility: {}", e))
            })
    }

    fn set_label(&self, text: &str) -> Result<()> {
        self.window
            .emit(LABEL_CHANGED_EVENT, text.to_string())
            .map_err(|e| CalendarError::WindowError(format!("Failed to update label: {}", e)))
    }
}
