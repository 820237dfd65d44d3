use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::summary::RosterSummary;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_rate, colorize};
use crate::utils::table::{Column, Table};

/// List every recorded day with its head-count.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (_store, session) = open_session(cli, cfg)?;

    if session.archive.is_empty() {
        info("No attendance has been recorded yet.");
        return Ok(());
    }

    header(format!("{} recorded days", session.archive.len()));

    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::right("Total"),
        Column::right("Present"),
        Column::right("Absent"),
        Column::right("Rate"),
    ]);

    for (day, roster) in session.archive.iter() {
        let s = RosterSummary::of(roster);
        table.add_row(vec![
            day.to_string(),
            s.total.to_string(),
            s.present.to_string(),
            s.absent.to_string(),
            colorize(&format!("{}%", s.rate), color_for_rate(s.rate)),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
