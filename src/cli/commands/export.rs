use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, Labels, default_output_file};
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let (store, session) = open_session(cli, cfg)?;

        let path = match file {
            Some(f) => expand_tilde(f),
            None => default_output_file(&cfg.export_file, *format),
        };

        ExportLogic::export(
            &*store,
            &session.archive,
            *format,
            &path,
            *force,
            Labels::for_language(cfg.language),
        )?;
    }
    Ok(())
}
