pub mod business_day;
pub mod csv_json;
pub mod date_math;
pub mod error;
pub mod month_grid;
pub mod pricing;
pub mod rokuyo;
pub mod selection;
pub mod step_calc;

pub use business_day::count_business_days;
pub use month_grid::{render_month, DayCell, DayTone, GridContext, MonthCell, MonthGrid};
pub use rokuyo::{rokuyo_of, Rokuyo};
pub use selection::{DateRange, Selection};
