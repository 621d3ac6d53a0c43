use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "eldenreg", bin_name = "eldenreg", version)]
#[command(about = "Register users locally with real-time field validation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and register a new user
    #[command(alias = "r")]
    Register {
        /// Username (3-20 letters, numbers or underscores)
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (at least 8 characters)
        #[arg(short, long)]
        password: String,

        /// Skip the configured submit delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Validate fields without registering
    #[command(alias = "c")]
    Check {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        password: Option<String>,
    },

    /// List registered users
    #[command(alias = "ls")]
    List,

    /// Show total users and the latest registration
    Stats,

    /// Remove every registered user
    Clear {
        /// Confirm removal
        #[arg(long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, submit-delay-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
