pub mod active_session;
pub mod day_summary;
pub mod punch;
pub mod punch_type;
pub mod shift;

pub use active_session::ActiveSession;
pub use day_summary::{DayEntry, DaySummary};
pub use punch::Punch;
pub use punch_type::{PunchSource, PunchType};
pub use shift::Shift;
