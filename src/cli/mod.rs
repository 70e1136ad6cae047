//! CLI module for the SHAKTI terminal client
//!
//! Provides command-line parsing for the `shakti` binary. Uses clap for
//! argument parsing and owo-colors for colored terminal output.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SHAKTI AI - terminal client for the analysis dashboard
///
/// Sign in, start analyses with images, videos and PDFs, and follow up on
/// existing conversations.
#[derive(Parser, Debug)]
#[command(
    name = "shakti",
    version,
    about = "SHAKTI AI - terminal client for the analysis dashboard",
    long_about = "Terminal client for the SHAKTI AI analysis backend.\n\n\
                  Attachments are validated locally: up to 5 images (5MB each),\n\
                  2 videos (100MB each) and 1 PDF (10MB) per message.",
    after_help = "EXAMPLES:\n    \
                  shakti login -e ryan@example.com          # Sign in (prompts for SHAKTI_PASSWORD)\n    \
                  shakti new -m 'Count the vehicles' a.png  # Start an analysis\n    \
                  shakti chats                              # List recent analyses\n    \
                  shakti send 6753a1 -m 'Any aircraft?'     # Follow up on an analysis"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "shakti.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "SHAKTI_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and store the session token
    Signup {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "SHAKTI_PASSWORD", hide_env_values = true)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Rank or position
        #[arg(long, default_value = "")]
        position: String,
    },

    /// Forget the stored session token
    Logout,

    /// Show the signed-in account
    Whoami,

    /// List recent analyses
    Chats,

    /// Start a new analysis
    New {
        /// Message text
        #[arg(short, long)]
        message: Option<String>,

        /// Images, videos or a PDF to attach
        files: Vec<PathBuf>,
    },

    /// Print the history of an analysis
    Show {
        /// Analysis id
        id: String,
    },

    /// Send a follow-up message to an analysis
    Send {
        /// Analysis id
        id: String,

        /// Message text
        #[arg(short, long)]
        message: Option<String>,

        /// Images, videos or a PDF to attach
        files: Vec<PathBuf>,
    },

    /// Delete an analysis
    Delete {
        /// Analysis id
        id: String,
    },

    /// Change the account password
    Passwd {
        /// Current password
        #[arg(long, env = "SHAKTI_PASSWORD", hide_env_values = true)]
        current: String,

        /// New password
        #[arg(long, env = "SHAKTI_NEW_PASSWORD", hide_env_values = true)]
        new: String,
    },

    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
