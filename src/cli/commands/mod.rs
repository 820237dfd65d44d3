pub mod add;
pub mod config;
pub mod dates;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod mark;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::storage::{KeyValueStore, MemoryStore};
use crate::core::store;
use crate::core::AttendanceSession;
use crate::db::kv::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::error;
use crate::utils::date::session_day;

/// Open the configured store. If the database cannot be opened the command
/// still runs against a volatile store; nothing will be persisted.
pub(crate) fn open_store(cfg: &Config) -> Box<dyn KeyValueStore> {
    match SqliteStore::open(&cfg.database) {
        Ok(store) => Box::new(store),
        Err(e) => {
            error(format!(
                "Cannot open attendance database {}: {e}. Changes will not be saved.",
                cfg.database
            ));
            Box::new(MemoryStore::new())
        }
    }
}

/// Store plus today's session, ready for one command.
pub(crate) fn open_session(
    cli: &Cli,
    cfg: &Config,
) -> AppResult<(Box<dyn KeyValueStore>, AttendanceSession)> {
    let today = session_day(cli.date.as_deref())?;
    let store = open_store(cfg);
    let session = store::load(&*store, &cfg.storage_key, today);
    Ok((store, session))
}
