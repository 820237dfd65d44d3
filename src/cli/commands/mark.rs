use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

fn word(present: bool) -> &'static str {
    if present { "present" } else { "absent" }
}

/// `mark <ID>` and `mark-all`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Mark { id, absent } => {
            let (mut store, mut session) = open_session(cli, cfg)?;
            let present = !*absent;

            if !session.set_present(&mut *store, *id, present) {
                warning(format!("{}; nothing changed.", AppError::StudentNotFound(*id)));
                return Ok(());
            }

            let name = session
                .roster
                .get(*id)
                .map(|s| s.name.as_str())
                .unwrap_or_default();
            success(format!("#{id} '{name}' marked {}", word(present)));
        }

        Commands::MarkAll { absent } => {
            let (mut store, mut session) = open_session(cli, cfg)?;
            let present = !*absent;

            if session.roster.is_empty() {
                warning(format!("The roster of {} is empty.", session.today));
                return Ok(());
            }

            session.set_all_present(&mut *store, present);
            success(format!(
                "All {} students marked {}",
                session.roster.len(),
                word(present)
            ));
        }

        _ => {}
    }

    Ok(())
}
