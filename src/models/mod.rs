pub mod archive;
pub mod date_key;
pub mod roster;
pub mod student;

pub use archive::{AttendanceArchive, DecodedArchive};
pub use date_key::DateKey;
pub use roster::Roster;
pub use student::StudentRecord;
