use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rattendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance client: clock in/out, presence matrix and reports from an attendance API",
    long_about = None
)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Display timezone (IANA name), overrides `display_timezone`
    #[arg(global = true, long = "tz", value_name = "ZONE")]
    pub tz: Option<String>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init {
        #[arg(long = "api-url", help = "Base URL of the attendance API")]
        api_url: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
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

    /// Sign in and store the access token
    Login {
        #[arg(long)]
        email: String,

        /// Falls back to $RATTENDANCE_PASSWORD
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored access token
    Logout,

    /// Record a check-in or check-out
    Clock {
        #[arg(value_enum)]
        action: ClockAction,

        #[arg(long)]
        note: Option<String>,

        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        #[arg(long, help = "Human-readable place name")]
        place: Option<String>,
    },

    /// Show your own attendance records
    History {
        #[arg(
            long,
            short,
            help = "Year/month/day or a custom range (default: current month)"
        )]
        period: Option<String>,
    },

    /// List employees
    Employees {
        #[arg(long, short, help = "Filter by name, department or id")]
        search: Option<String>,
    },

    /// List holidays
    Holidays,

    /// Leave types and requests
    Leave {
        #[command(subcommand)]
        action: LeaveAction,
    },

    /// Correct an attendance log (admin)
    EditLog {
        id: i64,

        #[arg(long = "in", help = "New check-in (YYYY-MM-DD HH:MM or RFC 3339)")]
        check_in: Option<String>,

        #[arg(long = "out", help = "New check-out (YYYY-MM-DD HH:MM or RFC 3339)")]
        check_out: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Employee × day presence matrix with anomaly badges
    Matrix {
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,

        #[arg(long, short, conflicts_with_all = ["from", "to"])]
        period: Option<String>,

        #[arg(long, value_name = "FILE", help = "Read activity from a JSON file instead of the API")]
        input: Option<String>,

        #[arg(long, value_name = "FILE", help = "Employee directory JSON (with --input)")]
        employees: Option<String>,

        #[arg(long, value_delimiter = ',', help = "Employee ids listed first")]
        pin: Vec<i64>,

        #[arg(long, help = "Print every non-empty cell with its note and location")]
        detail: bool,

        #[arg(long, value_enum, requires = "file")]
        export: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Attendance report (server CSV)
    Report {
        #[arg(long, value_name = "FILE", help = "Read the CSV report from a file instead of the API")]
        input: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,

        #[arg(long, short, conflicts_with_all = ["from", "to"])]
        period: Option<String>,

        #[arg(long, short, help = "Keep rows containing this text")]
        search: Option<String>,

        #[arg(long, value_name = "COLUMN=VALUE")]
        filter: Vec<String>,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long, value_enum, requires = "file")]
        export: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(
            long,
            value_name = "FILE",
            conflicts_with_all = ["input", "export"],
            help = "Save the server-rendered report as-is"
        )]
        download: Option<String>,

        #[arg(long = "server-format", value_enum, default_value = "xlsx")]
        server_format: ServerFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClockAction {
    In,
    Out,
}

#[derive(Subcommand)]
pub enum LeaveAction {
    /// List leave types
    Types,

    /// Request a leave
    Apply {
        #[arg(long = "type", help = "Leave type id")]
        leave_type: i64,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: String,

        #[arg(long)]
        reason: Option<String>,
    },
}

/// Formats the server renders itself for `report --download`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ServerFormat {
    Csv,
    Xlsx,
    Pdf,
}

impl ServerFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerFormat::Csv => "csv",
            ServerFormat::Xlsx => "xlsx",
            ServerFormat::Pdf => "pdf",
        }
    }
}
