pub mod models;
pub mod provider;
pub mod us;

pub use models::{Holiday, HolidayKind, HolidaySet};
pub use provider::{HolidayProvider, UsHolidayProvider};
