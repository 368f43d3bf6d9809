use crate::core::error::{CalendarError, Result};
use crate::holidays::models::{HolidayKind, HolidaySet};
use crate::holidays::us;
use std::ops::RangeInclusive;
use tracing::debug;

/// Source of holiday tables
pub trait HolidayProvider: Send + Sync {
    /// Region the table describes, e.g. `"US"`
    fn region(&self) -> &str;

    /// Builds a fresh table covering every year in `years`
    fn holidays_for(&self, years: RangeInclusive<i32>) -> Result<HolidaySet>;
}

/// US federal holidays, tagging work holidays by name keyword
#[derive(Debug, Clone)]
pub struct UsHolidayProvider {
    work_keywords: Vec<String>,
}

impl UsHolidayProvider {
    pub fn new(work_keywords: Vec<String>) -> Self {
        Self { work_keywords }
    }

    fn classify(&self, name: &str) -> HolidayKind {
        if self.work_keywords.iter().any(|keyword| name.contains(keyword.as_str())) {
            HolidayKind::Work
        } else {
            HolidayKind::Regular
        }
    }
}

impl Default for UsHolidayProvider {
    fn default() -> Self {
        Self::new(vec!["Christmas".to_string(), "Thanksgiving".to_string()])
    }
}

impl HolidayProvider for UsHolidayProvider {
    fn region(&self) -> &str {
        "US"
    }

    fn holidays_for(&self, years: RangeInclusive<i32>) -> Result<HolidaySet> {
        if years.is_empty() {
            return Err(CalendarError::HolidayDataUnavailable(format!(
                "empty year range {}..={}",
                years.start(),
                years.end()
            )));
        }

        for year in [*years.start(), *years.end()] {
            if !us::is_supported_year(year) {
                return Err(CalendarError::HolidayDataUnavailable(format!(
                    "year {} is outside {}..={}",
                    year,
                    us::FIRST_SUPPORTED_YEAR,
                    us::LAST_SUPPORTED_YEAR
                )));
            }
        }

        let mut set = HolidaySet::new(years.clone());
        for year in years {
            for mut holiday in us::holidays_in_year(year) {
                holiday.kind = self.classify(&holiday.name);
                set.insert(holiday);
            }
        }

        debug!("Built {} holiday table with {} entries", self.region(), set.len());
        Ok(set)
    }
}
