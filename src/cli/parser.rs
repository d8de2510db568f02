use crate::core::calculator::months::MatchFilter;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for guardroster
/// CLI application to plan guard rosters and compute compensation with SQLite
#[derive(Parser)]
#[command(
    name = "guardroster",
    version = env!("CARGO_PKG_VERSION"),
    about = "Guard roster and compensation ledger for club match days, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage personnel
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },

    /// Manage matches
    Match {
        #[command(subcommand)]
        action: MatchAction,
    },

    /// Toggle a person's assignment for a match (on → off → on ...)
    Toggle {
        /// Match ID
        match_id: i64,

        /// Person ID or name
        person: String,
    },

    /// Set the work window of a working guard
    Time {
        /// Match ID
        match_id: i64,

        /// Person ID or name
        person: String,

        #[arg(
            long = "start",
            help = "Start time (HH:MM); with --end omitted too, the current window is kept"
        )]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "notes", default_value = "")]
        notes: String,
    },

    /// Manage security duties
    Duty {
        #[command(subcommand)]
        action: DutyAction,
    },

    /// List work entries and security duties, newest first
    Hours {
        #[arg(long = "person", help = "Only rows for this person (ID or name)")]
        person: Option<String>,
    },

    /// Per-person compensation and season totals
    Stats,

    /// Export work entries and security duties
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "person", help = "Only rows for this person (ID or name)")]
        person: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: arbetstid_<name|alla>.<format>)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PersonAction {
    /// Add a person to the roster
    Add {
        name: String,

        #[arg(long = "role", default_value = "E", help = "R = regular, E = extra")]
        role: String,

        #[arg(long = "security", help = "May be assigned security duties")]
        security: bool,
    },

    /// List the roster with season hours
    List,

    /// Change role or security flag
    Edit {
        /// Person ID or name
        person: String,

        #[arg(long = "role", help = "R = regular, E = extra")]
        role: Option<String>,

        #[arg(long = "security", help = "true / false")]
        security: Option<bool>,
    },

    /// Delete a person together with their assignments and work hours
    Del {
        /// Person ID or name
        person: String,
    },
}

#[derive(Subcommand)]
pub enum MatchAction {
    /// Add a match
    Add {
        #[arg(long = "date", help = "Match date (YYYY-MM-DD)")]
        date: String,

        #[arg(long = "time", help = "Kickoff (HH:MM or TBA), default from config")]
        time: Option<String>,

        #[arg(long = "opponent")]
        opponent: String,

        #[arg(long = "type", default_value = "home", help = "home / away")]
        match_type: String,

        #[arg(long = "distance", help = "Distance in mil (away matches)")]
        distance: Option<f64>,

        #[arg(long = "guards", help = "Required guards, default from config")]
        guards: Option<u32>,
    },

    /// List matches grouped by month
    List {
        #[arg(long, value_enum, default_value = "all")]
        filter: MatchFilter,

        #[arg(
            long = "collapse",
            value_name = "YYYY-MM",
            help = "Collapse a month section (repeatable)"
        )]
        collapse: Vec<String>,
    },

    /// Show one match with per-guard details
    Show { match_id: i64 },
}

#[derive(Subcommand)]
pub enum DutyAction {
    /// Register a security duty
    Add {
        #[arg(long = "date", help = "Duty date (YYYY-MM-DD)")]
        date: String,

        #[arg(long = "opponent", help = "Match or assignment description")]
        opponent: String,

        #[arg(long = "person", help = "Security-responsible person (ID or name)")]
        person: String,

        #[arg(long = "hours")]
        hours: Option<f64>,

        #[arg(long = "mileage", help = "Mileage compensation in kr")]
        mileage: Option<f64>,

        #[arg(long = "notes", default_value = "")]
        notes: String,
    },

    /// Edit a security duty; omitted fields are kept
    Edit {
        id: i64,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "opponent")]
        opponent: Option<String>,

        #[arg(long = "person")]
        person: Option<String>,

        #[arg(long = "hours")]
        hours: Option<f64>,

        #[arg(long = "mileage")]
        mileage: Option<f64>,

        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Delete a security duty
    Del { id: i64 },

    /// List security duties
    List,
}
