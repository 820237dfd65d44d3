use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Add a student to today's roster.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = &cli.command {
        let (mut store, mut session) = open_session(cli, cfg)?;

        match session.add_student(&mut *store, name) {
            Some(id) => success(format!(
                "Added #{} '{}' to the roster of {}",
                id,
                name.trim(),
                session.today
            )),
            None => warning("Student name is empty; nothing added."),
        }
    }

    Ok(())
}
