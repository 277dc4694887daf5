pub mod backup;
pub mod log;
pub mod session;
pub mod store;
pub mod ticker;
pub mod today;

pub use session::{SessionState, SessionTracker};
pub use store::ShiftStore;
