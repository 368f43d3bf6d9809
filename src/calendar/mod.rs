pub mod month;
pub mod view;

pub use month::{MonthGrid, MonthWindow, WeekHighlight};
pub use view::CalendarView;
