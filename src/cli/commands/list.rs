use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::summary::RosterSummary;
use crate::errors::AppResult;
use crate::models::{DateKey, Roster};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_presence, color_for_rate, colorize};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { day } = &cli.command {
        let (_store, session) = open_session(cli, cfg)?;

        let day = match day {
            Some(d) => DateKey::parse(d)?,
            None => session.today,
        };

        // today's roster comes from the session, other days are history
        let roster = if day == session.today {
            Some(&session.roster)
        } else {
            session.archive.get(&day)
        };

        match roster {
            Some(r) if !r.is_empty() => print_roster(&day, r),
            _ => info(format!("No students recorded for {day}.")),
        }
    }
    Ok(())
}

fn print_roster(day: &DateKey, roster: &Roster) {
    header(format!("Attendance {day}"));

    let mut table = Table::new(vec![
        Column::right("#"),
        Column::right("ID"),
        Column::left("Name"),
        Column::left("Status"),
    ]);

    for (i, s) in roster.students().iter().enumerate() {
        let status = if s.present { "present" } else { "absent" };
        table.add_row(vec![
            (i + 1).to_string(),
            s.id.to_string(),
            s.name.clone(),
            colorize(status, color_for_presence(s.present)),
        ]);
    }

    print!("{}", table.render());
    println!("{}", summary_line(&RosterSummary::of(roster)));
}

fn summary_line(s: &RosterSummary) -> String {
    format!(
        "\nTotal: {} | Present: {} | Absent: {} | Rate: {}",
        s.total,
        s.present,
        s.absent,
        colorize(&format!("{}%", s.rate), color_for_rate(s.rate))
    )
}
