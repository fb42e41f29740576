pub mod app_settings;
pub mod holiday;
pub mod persistence;
pub mod session;

pub use app_settings::AppSettings;
pub use holiday::{Holiday, HolidayData, HolidayTable};
pub use persistence::Persistable;
pub use session::Session;
