use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// How a holiday is treated for week highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    Regular,
    Work,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub kind: HolidayKind,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            kind: HolidayKind::Regular,
        }
    }

    pub fn is_work(&self) -> bool {
        self.kind == HolidayKind::Work
    }
}

/// Read-only table of holidays for one region over a range of years.
///
/// Holds only holidays dated inside `years`.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    years: Option<RangeInclusive<i32>>,
    by_date: BTreeMap<NaiveDate, Vec<Holiday>>,
}

impl HolidaySet {
    pub fn new(years: RangeInclusive<i32>) -> Self {
        Self {
            years: Some(years),
            by_date: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, holiday: Holiday) {
        self.by_date.entry(holiday.date).or_default().push(holiday);
    }

    pub fn years(&self) -> Option<&RangeInclusive<i32>> {
        self.years.as_ref()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    /// Holiday names for `date` joined with `"; "`, or `None` when the date is not a holiday
    pub fn get(&self, date: NaiveDate) -> Option<String> {
        self.by_date.get(&date).map(|holidays| {
            holidays
                .iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        })
    }

    /// Holidays on `date`, work holidays first
    pub fn holidays_on(&self, date: NaiveDate) -> Vec<&Holiday> {
        let mut holidays: Vec<&Holiday> = self
            .by_date
            .get(&date)
            .map(|v| v.iter().collect())
            .unwrap_or_default();
        holidays.sort_by_key(|h| !h.is_work());
        holidays
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.by_date.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
