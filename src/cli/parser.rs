use crate::export::ExportFormat;
use crate::models::checks::Check;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for kintai-checker
/// CLI application that checks attendance records against applications
#[derive(Parser)]
#[command(
    name = "kintai-checker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check daily attendance records against overtime and remote-work applications",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(global = true, short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
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

    /// Check a daily attendance export against an application export
    Check {
        /// Daily attendance CSV (日次データ)
        #[arg(long, short = 'd', value_name = "FILE")]
        daily: PathBuf,

        /// Application CSV (届出データ)
        #[arg(long, short = 'a', value_name = "FILE")]
        applications: PathBuf,

        /// Run only these checks (repeatable)
        #[arg(long, value_enum, value_name = "CHECK")]
        only: Vec<Check>,

        /// Skip these checks (repeatable)
        #[arg(long, value_enum, value_name = "CHECK")]
        skip: Vec<Check>,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Write the report to FILE instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<PathBuf>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Exit with status 2 when at least one finding is reported
        #[arg(long = "fail-on-findings")]
        fail_on_findings: bool,
    },
}

impl Commands {
    /// Commands that rewrite the config file, and so must still run when
    /// the current one cannot be parsed.
    pub fn repairs_config(&self) -> bool {
        matches!(
            self,
            Commands::Init { .. }
                | Commands::Config {
                    edit_config: true,
                    ..
                }
        )
    }
}
