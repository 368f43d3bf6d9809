use chrono::NaiveDate;
use holiday_calendar::calendar::month::MonthWindow;
use holiday_calendar::calendar::CalendarView;
use holiday_calendar::core::error::{CalendarError, Result};
use holiday_calendar::holidays::{HolidayProvider, HolidaySet, UsHolidayProvider};
use holiday_calendar::ui::tray::{AppLifecycle, CalendarSurface, Notifier, TrayController};
use holiday_calendar::core::logging;
use holiday_calendar::utils::startup::{Autostart, LoginLauncher};
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct FakeWindow {
    visible: Arc<AtomicBool>,
    label: Arc<Mutex<Option<String>>>,
}

impl CalendarSurface for FakeWindow {
    fn show(&self) -> Result<()> {
        self.visible.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        self.visible.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_visible(&self) -> Result<bool> {
        Ok(self.visible.load(Ordering::SeqCst))
    }

    fn set_label(&self, text: &str) -> Result<()> {
        *self.label.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct FakeLifecycle {
    exit_code: Arc<Mutex<Option<i32>>>,
}

impl AppLifecycle for FakeLifecycle {
    fn exit(&self, code: i32) {
        *self.exit_code.lock().unwrap() = Some(code);
    }
}

#[derive(Clone, Default)]
struct FakeNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Notifier for FakeNotifier {
    fn notify(&self, _title: &str, body: &str) -> Result<()> {
        self.messages.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct FakeLauncher {
    enabled: Arc<AtomicBool>,
    refuse: bool,
}

impl LoginLauncher for FakeLauncher {
    fn enable(&self) -> Result<()> {
        if self.refuse {
            return Err(CalendarError::AutostartError("access denied".to_string()));
        }
        self.enabled.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn disable(&self) -> Result<()> {
        self.enabled.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_enabled(&self) -> Result<bool> {
        Ok(self.enabled.load(Ordering::SeqCst))
    }
}

struct BrokenProvider;

impl HolidayProvider for BrokenProvider {
    fn region(&self) -> &str {
        "US"
    }

    fn holidays_for(&self, _years: RangeInclusive<i32>) -> Result<HolidaySet> {
        Err(CalendarError::HolidayDataUnavailable("no table".to_string()))
    }
}

struct Harness {
    tray: TrayController,
    window: FakeWindow,
    lifecycle: FakeLifecycle,
    notifier: FakeNotifier,
}

fn harness_with(provider: Box<dyn HolidayProvider>, autostart: Option<Autostart>) -> Harness {
    logging::init_for_tests();
    let window = FakeWindow::default();
    let lifecycle = FakeLifecycle::default();
    let notifier = FakeNotifier::default();
    let view = CalendarView::with_window(
        provider,
        MonthWindow::containing(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
    );
    let tray = TrayController::new(
        Box::new(window.clone()),
        view,
        Box::new(lifecycle.clone()),
        Box::new(notifier.clone()),
        autostart,
    );
    Harness {
        tray,
        window,
        lifecycle,
        notifier,
    }
}

fn harness() -> Harness {
    harness_with(Box::new(UsHolidayProvider::default()), None)
}

#[test]
fn test_label_before_any_selection() {
    let h = harness();
    assert_eq!(h.tray.current_label(), "Select a date");
    assert!(h.window.label.lock().unwrap().is_none());
}

#[test]
fn test_independence_day_in_several_years() {
    let mut h = harness();
    for year in [1990, 2024, 2026, 2100] {
        let label = h.tray.select_date(&format!("{}-07-04", year)).unwrap();
        assert_eq!(label, "Holiday: Independence Day");
    }
}

#[test]
fn test_plain_day_reports_no_holiday() {
    let mut h = harness();
    assert_eq!(h.tray.select_date("2024-03-12").unwrap(), "No holiday");
    assert_eq!(h.window.label.lock().unwrap().as_deref(), Some("No holiday"));
}

#[test]
fn test_new_year_observed_on_previous_december() {
    let mut h = harness();
    assert_eq!(
        h.tray.select_date("2021-12-31").unwrap(),
        "Holiday: New Year's Day (observed)"
    );
    assert_eq!(h.tray.select_date("2022-01-01").unwrap(), "Holiday: New Year's Day");
}

#[test]
fn test_latest_selection_wins() {
    let mut h = harness();
    h.tray.select_date("2024-12-25").unwrap();
    h.tray.select_date("2024-12-26").unwrap();
    assert_eq!(h.tray.current_label(), "No holiday");

    h.tray.select_date("2024-11-28").unwrap();
    assert_eq!(h.tray.current_label(), "Holiday: Thanksgiving Day");
    assert_eq!(
        h.tray.view().last_selected(),
        NaiveDate::from_ymd_opt(2024, 11, 28)
    );
}

#[test]
fn test_provider_failure_is_surfaced() {
    let mut h = harness_with(Box::new(BrokenProvider), None);
    let err = h.tray.select_date("2024-07-04").unwrap_err();
    assert!(matches!(err, CalendarError::HolidayDataUnavailable(_)));
    assert_eq!(h.tray.current_label(), "Holiday data unavailable");
    assert_eq!(
        h.window.label.lock().unwrap().as_deref(),
        Some("Holiday data unavailable")
    );
    assert_eq!(
        *h.notifier.messages.lock().unwrap(),
        vec!["Holiday data unavailable".to_string()]
    );
}

#[test]
fn test_invalid_date_is_not_notified() {
    let mut h = harness();
    let err = h.tray.select_date("not-a-date").unwrap_err();
    assert!(matches!(err, CalendarError::InvalidDate(_)));
    assert_eq!(h.tray.current_label(), "Select a date");
    assert!(h.notifier.messages.lock().unwrap().is_empty());
}

#[test]
fn test_show_calendar_is_idempotent() {
    let h = harness();
    assert!(!h.window.is_visible().unwrap());

    h.tray.on_show_calendar().unwrap();
    assert!(h.window.is_visible().unwrap());

    h.tray.on_show_calendar().unwrap();
    assert!(h.window.is_visible().unwrap());
}

#[test]
fn test_toggle_hides_and_shows() {
    let h = harness();
    h.tray.on_toggle_calendar().unwrap();
    assert!(h.window.is_visible().unwrap());
    h.tray.on_toggle_calendar().unwrap();
    assert!(!h.window.is_visible().unwrap());
}

#[tokio::test]
async fn test_menu_show_and_quit() {
    let h = harness();
    h.tray.handle_menu_click("show_calendar").await.unwrap();
    assert!(h.window.is_visible().unwrap());

    h.tray.handle_menu_click("quit").await.unwrap();
    assert_eq!(*h.lifecycle.exit_code.lock().unwrap(), Some(0));
}

#[tokio::test]
async fn test_unknown_menu_item_is_ignored() {
    let h = harness();
    h.tray.handle_menu_click("something_else").await.unwrap();
    assert!(!h.window.is_visible().unwrap());
    assert!(h.lifecycle.exit_code.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_autostart_menu_round_trip() {
    let launcher = FakeLauncher::default();
    let autostart = Autostart::with_launcher(Box::new(launcher.clone()));
    let h = harness_with(Box::new(UsHolidayProvider::default()), Some(autostart));

    h.tray.handle_menu_click("enable_autostart").await.unwrap();
    assert!(launcher.enabled.load(Ordering::SeqCst));

    h.tray.handle_menu_click("disable_autostart").await.unwrap();
    assert!(!launcher.enabled.load(Ordering::SeqCst));

    let messages = h.notifier.messages.lock().unwrap().clone();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Auto-start enabled"));
    assert_eq!(messages[1], "Auto-start disabled.");
}

#[tokio::test]
async fn test_autostart_failure_is_reported() {
    let launcher = FakeLauncher {
        refuse: true,
        ..FakeLauncher::default()
    };
    let autostart = Autostart::with_launcher(Box::new(launcher));
    let h = harness_with(Box::new(UsHolidayProvider::default()), Some(autostart));

    h.tray.handle_menu_click("enable_autostart").await.unwrap();
    assert_eq!(
        *h.notifier.messages.lock().unwrap(),
        vec!["Failed to enable auto-start: Auto-start error: access denied".to_string()]
    );
}

#[tokio::test]
async fn test_autostart_unavailable_notifies() {
    let h = harness();
    h.tray.handle_menu_click("enable_autostart").await.unwrap();
    assert_eq!(
        *h.notifier.messages.lock().unwrap(),
        vec!["Auto-start is not available on this system.".to_string()]
    );
}

#[test]
fn test_month_navigation_through_controller() {
    let mut h = harness();
    let grids = h.tray.visible_months().unwrap();
    let titles: Vec<&str> = grids.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["June 2024", "July 2024", "August 2024"]);

    let grids = h.tray.shift_months(6).unwrap();
    let titles: Vec<&str> = grids.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["December 2024", "January 2025", "February 2025"]);
}
