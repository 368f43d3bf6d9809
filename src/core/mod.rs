pub mod app_state;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{CalendarError, Result};
