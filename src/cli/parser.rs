use clap::{Parser, Subcommand};

/// Command-line interface definition for timeclock
#[derive(Parser)]
#[command(
    name = "timeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small local time clock: clock in/out, breaks, today's total and an audit trail of every punch",
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
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Clock in (start a new shift)
    In,

    /// Clock out (close the running shift, ending any break)
    Out,

    /// Start a break in the running shift
    BreakStart,

    /// End the running break
    BreakEnd,

    /// Show the running session and its elapsed time
    Status {
        /// Keep refreshing the timer until the session ends
        #[arg(long, short)]
        watch: bool,
    },

    /// Show today's shifts and total
    Today,

    /// List every stored shift (most recent first)
    List,

    /// Manually correct a shift's start/end time (comment required)
    Edit {
        /// Shift id (or an unambiguous prefix)
        id: String,

        /// New start time (HH:MM); defaults to the current start
        #[arg(long = "start")]
        start: Option<String>,

        /// New end time (HH:MM); an end before the start means the next day
        #[arg(long = "end")]
        end: Option<String>,

        /// Why the shift was edited
        #[arg(long, short)]
        comment: String,
    },

    /// Delete a shift (its punches are kept)
    Del {
        /// Shift id (or an unambiguous prefix)
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the punch audit log
    Punches {
        /// Only punches of this shift (id or prefix)
        #[arg(long = "shift")]
        shift: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz elsewhere)
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
