use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attendbook
/// CLI application to take daily attendance, stored locally in SQLite
#[derive(Parser)]
#[command(
    name = "attendbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Take daily class attendance and export a multi-day summary spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this day (YYYY-MM-DD)
    #[arg(global = true, long = "date", hide = true)]
    pub date: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a student to today's roster
    Add {
        /// Student name (surrounding whitespace is ignored)
        name: String,
    },

    /// Mark one student present (or absent with --absent)
    Mark {
        /// Student id as shown by `list`
        id: u64,

        #[arg(long = "absent", help = "Mark the student absent instead")]
        absent: bool,
    },

    /// Mark every student in today's roster present (or absent with --absent)
    MarkAll {
        #[arg(long = "absent", help = "Mark everybody absent instead")]
        absent: bool,
    },

    /// Show a roster with its head-count
    List {
        #[arg(
            long = "day",
            value_name = "YYYY-MM-DD",
            help = "Show a past day instead of today"
        )]
        day: Option<String>,
    },

    /// List every recorded day
    Dates,

    /// Export every recorded day as one attendance sheet
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: export_file from the configuration)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
