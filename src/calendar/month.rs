use crate::core::error::{CalendarError, Result};
use crate::holidays::HolidaySet;
use chrono::{Datelike, Local, Months, NaiveDate};
use serde::Serialize;
use std::ops::RangeInclusive;

/// How strongly a week row is highlighted, by number of work holidays in it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekHighlight {
    None,
    Single,
    Multiple,
}

impl WeekHighlight {
    fn from_count(count: usize) -> Self {
        match count {
            0 => WeekHighlight::None,
            1 => WeekHighlight::Single,
            _ => WeekHighlight::Multiple,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub holiday: Option<String>,
    pub is_work_holiday: bool,
}

/// One Monday-first row of a month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Week {
    pub iso_week: u32,
    pub highlight: WeekHighlight,
    pub days: [Option<DayCell>; 7],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weeks: Vec<Week>,
}

/// Previous, current and next month around an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    anchor: NaiveDate,
}

impl MonthWindow {
    /// Window anchored on the month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self { anchor: first_of_month(date) }
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Moves the anchor by `delta` months; negative moves back
    pub fn shift(&mut self, delta: i32) -> Result<()> {
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.anchor.checked_add_months(months)
        } else {
            self.anchor.checked_sub_months(months)
        };
        self.anchor = moved.ok_or_else(|| {
            CalendarError::InvalidDate(format!("cannot move {} by {} months", self.anchor, delta))
        })?;
        Ok(())
    }

    /// First days of the previous, current and next month
    pub fn months(&self) -> Result<[NaiveDate; 3]> {
        let out_of_range =
            || CalendarError::InvalidDate(format!("no neighbouring months for {}", self.anchor));
        let previous = self.anchor.checked_sub_months(Months::new(1)).ok_or_else(out_of_range)?;
        let next = self.anchor.checked_add_months(Months::new(1)).ok_or_else(out_of_range)?;
        Ok([previous, self.anchor, next])
    }

    /// Calendar years touched by the window
    pub fn years(&self) -> Result<RangeInclusive<i32>> {
        let [previous, _, next] = self.months()?;
        Ok(previous.year()..=next.year())
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Lays out the month starting at `first` and marks weeks holding work holidays
pub fn build_month_grid(first: NaiveDate, holidays: &HolidaySet) -> MonthGrid {
    let first = first_of_month(first);
    let mut weeks: Vec<Week> = Vec::new();
    let mut work_counts: Vec<usize> = Vec::new();

    for day in 1..=days_in_month(first) {
        let Some(date) = first.with_day(day) else { continue };
        let column = date.weekday().num_days_from_monday() as usize;

        if weeks.is_empty() || column == 0 {
            weeks.push(Week {
                iso_week: date.iso_week().week(),
                highlight: WeekHighlight::None,
                days: Default::default(),
            });
            work_counts.push(0);
        }

        let holidays_today = holidays.holidays_on(date);
        let is_work_holiday = holidays_today.iter().any(|h| h.is_work());
        let row = weeks.len() - 1;
        work_counts[row] += holidays_today.iter().filter(|h| h.is_work()).count();

        weeks[row].days[column] = Some(DayCell {
            date,
            day,
            holiday: holidays.get(date),
            is_work_holiday,
        });
    }

    for (week, count) in weeks.iter_mut().zip(work_counts) {
        week.highlight = WeekHighlight::from_count(count);
    }

    MonthGrid {
        year: first.year(),
        month: first.month(),
        title: first.format("%B %Y").to_string(),
        weeks,
    }
}
