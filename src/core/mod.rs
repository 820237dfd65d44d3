pub mod config;
pub mod log;
pub mod session;
pub mod storage;
pub mod store;
pub mod summary;

pub use session::AttendanceSession;
pub use storage::{KeyValueStore, MemoryStore};
pub use summary::RosterSummary;
