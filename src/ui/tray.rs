use crate::calendar::{CalendarView, MonthGrid};
use crate::core::config::AppConfig;
use crate::core::error::{CalendarError, ErrorSeverity, Result, ResultExt};
use crate::holidays::UsHolidayProvider;
use crate::ui::panel::CalendarWindow;
use crate::utils::startup::Autostart;
use std::path::Path;
use tauri::{
    api::notification::Notification, AppHandle, CustomMenuItem, Icon, Manager,
    SystemTray as TauriSystemTray, SystemTrayEvent, SystemTrayMenu, SystemTrayMenuItem,
};
use tracing::{debug, error, info, warn};

pub const NOTIFICATION_TITLE: &str = "Calendar Widget";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// The window the tray shows and hides
pub trait CalendarSurface: Send + Sync {
    fn show(&self) -> Result<()>;
    fn hide(&self) -> Result<()>;
    fn is_visible(&self) -> Result<bool>;
    /// Mirrors the selection label into the window
    fn set_label(&self, text: &str) -> Result<()>;
}

/// Process lifecycle owned by the GUI runtime
pub trait AppLifecycle: Send + Sync {
    fn exit(&self, code: i32);
}

pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str) -> Result<()>;
}

impl AppLifecycle for AppHandle {
    fn exit(&self, code: i32) {
        AppHandle::exit(self, code);
    }
}

/// Desktop notifications through the bundle identifier
pub struct DesktopNotifier {
    identifier: String,
}

impl DesktopNotifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self { identifier: identifier.into() }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<()> {
        debug!("Showing notification: {} - {}", title, body);
        Notification::new(&self.identifier)
            .title(title)
            .body(body)
            .show()
            .map_err(|e| CalendarError::SystemError(format!("Failed to show notification: {}", e)))
    }
}

/// Entries of the tray context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowCalendar,
    EnableAutostart,
    DisableAutostart,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::ShowCalendar,
        MenuAction::EnableAutostart,
        MenuAction::DisableAutostart,
        MenuAction::Quit,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MenuAction::ShowCalendar => "show_calendar",
            MenuAction::EnableAutostart => "enable_autostart",
            MenuAction::DisableAutostart => "disable_autostart",
            MenuAction::Quit => "quit",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MenuAction::ShowCalendar => "Show Calendar",
            MenuAction::EnableAutostart => "Enable Auto-start",
            MenuAction::DisableAutostart => "Disable Auto-start",
            MenuAction::Quit => "Quit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

/// Reads a PNG icon from disk, failing loudly rather than falling back to a blank icon
pub fn load_tray_icon(path: &Path) -> Result<Vec<u8>> {
    let icon_error = |reason: String| CalendarError::IconResource {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = std::fs::read(path).map_err(|e| icon_error(e.to_string()))?;
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(icon_error("not a PNG image".to_string()));
    }
    Ok(bytes)
}

/// Owns the tray menu behavior, the calendar window and its view for the process lifetime
pub struct TrayController {
    window: Box<dyn CalendarSurface>,
    view: CalendarView,
    lifecycle: Box<dyn AppLifecycle>,
    notifier: Box<dyn Notifier>,
    autostart: Option<Autostart>,
}

impl TrayController {
    pub fn new(
        window: Box<dyn CalendarSurface>,
        view: CalendarView,
        lifecycle: Box<dyn AppLifecycle>,
        notifier: Box<dyn Notifier>,
        autostart: Option<Autostart>,
    ) -> Self {
        Self {
            window,
            view,
            lifecycle,
            notifier,
            autostart,
        }
    }

    /// Creates the tray menu handed to the Tauri builder
    pub fn create_tray_menu() -> TauriSystemTray {
        let item = |action: MenuAction| CustomMenuItem::new(action.id(), action.title());

        let tray_menu = SystemTrayMenu::new()
            .add_item(item(MenuAction::ShowCalendar))
            .add_native_item(SystemTrayMenuItem::Separator)
            .add_item(item(MenuAction::EnableAutostart))
            .add_item(item(MenuAction::DisableAutostart))
            .add_native_item(SystemTrayMenuItem::Separator)
            .add_item(item(MenuAction::Quit));

        TauriSystemTray::new().with_menu(tray_menu)
    }

    /// Applies the configured icon and tooltip, then builds the calendar window and view eagerly
    pub fn initialize(app_handle: &AppHandle, config: &AppConfig) -> Result<Self> {
        info!("Initializing system tray interface");
        let tray_handle = app_handle.tray_handle();

        if let Some(icon_path) = &config.tray.icon_path {
            let bytes = load_tray_icon(icon_path)?;
            tray_handle.set_icon(Icon::Raw(bytes))?;
            debug!("Tray icon loaded from {}", icon_path.display());
        }

        if let Err(e) = tray_handle.set_tooltip(&config.tray.tooltip) {
            warn!("Failed to update tray tooltip: {}", e);
        }

        let window = CalendarWindow::create(app_handle, &config.ui)?;
        let provider = UsHolidayProvider::new(config.holidays.work_holiday_keywords.clone());
        let view = CalendarView::new(Box::new(provider));

        let autostart = std::env::current_exe()
            .with_context("Failed to locate executable")
            .and_then(|exe| Autostart::for_current_platform(&exe))
            .map(Some)
            .log_and_continue(None);

        let notifier = DesktopNotifier::new(app_handle.config().tauri.bundle.identifier.clone());

        let controller = Self::new(
            Box::new(window),
            view,
            Box::new(app_handle.clone()),
            Box::new(notifier),
            autostart,
        );

        if config.ui.show_on_startup {
            controller.on_show_calendar()?;
        }

        debug!("System tray initialized successfully");
        Ok(controller)
    }

    pub fn view(&self) -> &CalendarView {
        &self.view
    }

    /// Shows the calendar window; showing a visible window again is harmless
    pub fn on_show_calendar(&self) -> Result<()> {
        debug!("Showing calendar window");
        self.window.show()
    }

    /// Hides a visible calendar window, shows a hidden one
    pub fn on_toggle_calendar(&self) -> Result<()> {
        if self.window.is_visible()? {
            self.window.hide()
        } else {
            self.window.show()
        }
    }

    pub fn on_quit(&self) {
        info!("Application quit requested");
        self.lifecycle.exit(0);
    }

    /// Handles a date picked in the window and pushes the new label back to it
    pub fn select_date(&mut self, raw_date: &str) -> Result<String> {
        let result = self.view.select_iso_date(raw_date).map(str::to_string);

        // A failed lookup still rewrites the label, so always mirror it.
        let label = self.view.label_text().to_string();
        self.window.set_label(&label).log_and_continue(());

        if let Err(e) = &result {
            self.report_error(e);
        }
        result
    }

    pub fn current_label(&self) -> String {
        self.view.label_text().to_string()
    }

    pub fn visible_months(&self) -> Result<Vec<MonthGrid>> {
        self.view.visible_months()
    }

    pub fn shift_months(&mut self, delta: i32) -> Result<Vec<MonthGrid>> {
        self.view.shift_months(delta)
    }

    /// Handles system tray events
    pub async fn handle_tray_event(&self, event: SystemTrayEvent) -> Result<()> {
        match event {
            SystemTrayEvent::LeftClick { .. } => {
                debug!("Tray left-clicked - toggling calendar window");
                self.on_toggle_calendar()?;
            }
            SystemTrayEvent::MenuItemClick { id, .. } => {
                debug!("Menu item clicked: {}", id);
                self.handle_menu_click(&id).await?;
            }
            _ => {
                debug!("Unhandled tray event");
            }
        }
        Ok(())
    }

    /// Handles menu item clicks
    pub async fn handle_menu_click(&self, item_id: &str) -> Result<()> {
        match MenuAction::from_id(item_id) {
            Some(MenuAction::ShowCalendar) => {
                info!("Show Calendar clicked");
                self.on_show_calendar()?;
            }
            Some(MenuAction::EnableAutostart) => {
                info!("Enable Auto-start clicked");
                self.handle_autostart(true);
            }
            Some(MenuAction::DisableAutostart) => {
                info!("Disable Auto-start clicked");
                self.handle_autostart(false);
            }
            Some(MenuAction::Quit) => {
                info!("Quit clicked");
                self.on_quit();
            }
            None => {
                debug!("Unknown menu item clicked: {}", item_id);
            }
        }
        Ok(())
    }

    /// The outcome, success or failure, is told to the user here and not propagated
    fn handle_autostart(&self, enable: bool) {
        let Some(autostart) = &self.autostart else {
            warn!("Auto-start requested but no launch-at-login location is known");
            self.notify("Auto-start is not available on this system.");
            return;
        };

        let result = if enable {
            autostart.enable()
        } else {
            autostart.disable()
        };

        let message = match (&result, enable) {
            (Ok(()), true) => "Auto-start enabled. The app will start when you log in.".to_string(),
            (Ok(()), false) => "Auto-start disabled.".to_string(),
            (Err(e), true) => format!("Failed to enable auto-start: {}", e),
            (Err(e), false) => format!("Failed to disable auto-start: {}", e),
        };
        if let Err(e) = &result {
            warn!("{}", e);
        }
        self.notify(&message);
    }

    /// Logs an error by severity and tells the user when it affects them
    pub fn report_error(&self, e: &CalendarError) {
        match e.severity() {
            ErrorSeverity::High => error!("{}", e),
            _ => warn!("{}", e),
        }
        if e.should_notify_user() {
            self.notify(&e.user_message());
        }
    }

    fn notify(&self, message: &str) {
        if let Err(e) = self.notifier.notify(NOTIFICATION_TITLE, message) {
            warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_ids_round_trip() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_id(action.id()), Some(action));
        }
        assert_eq!(MenuAction::from_id("advanced"), None);
    }

    #[test]
    fn test_menu_titles() {
        assert_eq!(MenuAction::ShowCalendar.title(), "Show Calendar");
        assert_eq!(MenuAction::Quit.title(), "Quit");
    }

    #[test]
    fn test_missing_icon_is_an_error() {
        let err = load_tray_icon(Path::new("definitely/not/here/icon.png")).unwrap_err();
        assert!(matches!(err, CalendarError::IconResource { .. }));
    }

    #[test]
    fn test_non_png_icon_is_rejected() {
        let name = format!("holiday-calendar-{}.png", uuid::Uuid::new_v4());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, b"GIF89a not really a png").unwrap();

        let err = load_tray_icon(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        match err {
            CalendarError::IconResource { path: reported, reason } => {
                assert_eq!(reported, path);
                assert_eq!(reason, "not a PNG image");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bundled_icon_is_png() {
        let icon = Path::new(env!("CARGO_MANIFEST_DIR")).join("icons").join("icon.png");
        assert!(load_tray_icon(&icon).is_ok());
    }
}
