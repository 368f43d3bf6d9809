use crate::calendar::month::{build_month_grid, MonthGrid, MonthWindow};
use crate::core::error::{CalendarError, Result};
use crate::holidays::HolidayProvider;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

pub const INITIAL_LABEL: &str = "Select a date";
pub const NO_HOLIDAY_LABEL: &str = "No holiday";
pub const UNAVAILABLE_LABEL: &str = "Holiday data unavailable";

/// Label text for a lookup result
pub fn format_holiday_label(holiday: Option<&str>) -> String {
    match holiday {
        Some(name) => format!("Holiday: {}", name),
        None => NO_HOLIDAY_LABEL.to_string(),
    }
}

/// Date picker state: the selection label and the visible months
pub struct CalendarView {
    provider: Box<dyn HolidayProvider>,
    label: String,
    months: MonthWindow,
    last_selected: Option<NaiveDate>,
}

impl CalendarView {
    pub fn new(provider: Box<dyn HolidayProvider>) -> Self {
        Self::with_window(provider, MonthWindow::current())
    }

    pub fn with_window(provider: Box<dyn HolidayProvider>, months: MonthWindow) -> Self {
        Self {
            provider,
            label: INITIAL_LABEL.to_string(),
            months,
            last_selected: None,
        }
    }

    pub fn label_text(&self) -> &str {
        &self.label
    }

    pub fn last_selected(&self) -> Option<NaiveDate> {
        self.last_selected
    }

    pub fn month_window(&self) -> MonthWindow {
        self.months
    }

    /// Looks `date` up in a freshly built table for its year and overwrites the label.
    ///
    /// When the table cannot be built the label reads "Holiday data unavailable"
    /// and the error is returned.
    pub fn on_date_selected(&mut self, date: NaiveDate) -> Result<&str> {
        self.last_selected = Some(date);

        let holidays = match self.provider.holidays_for(date.year()..=date.year()) {
            Ok(holidays) => holidays,
            Err(e) => {
                warn!("Holiday lookup for {} failed: {}", date, e);
                self.label = UNAVAILABLE_LABEL.to_string();
                return Err(e);
            }
        };

        self.label = format_holiday_label(holidays.get(date).as_deref());
        debug!("Selected {} -> {}", date, self.label);
        Ok(&self.label)
    }

    /// Parses an ISO `YYYY-MM-DD` string from the date picker and selects it.
    /// An unparsable string leaves the label untouched.
    pub fn select_iso_date(&mut self, raw: &str) -> Result<&str> {
        let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|e| CalendarError::InvalidDate(format!("{}: {}", raw, e)))?;
        self.on_date_selected(date)
    }

    /// Grids for the previous, current and next month
    pub fn visible_months(&self) -> Result<Vec<MonthGrid>> {
        let holidays = self.provider.holidays_for(self.months.years()?)?;
        Ok(self
            .months
            .months()?
            .iter()
            .map(|first| build_month_grid(*first, &holidays))
            .collect())
    }

    /// Moves the window by `delta` months; on failure the window stays where it was
    pub fn shift_months(&mut self, delta: i32) -> Result<Vec<MonthGrid>> {
        let previous = self.months;
        self.months.shift(delta)?;
        match self.visible_months() {
            Ok(grids) => Ok(grids),
            Err(e) => {
                self.months = previous;
                Err(e)
            }
        }
    }
}
