use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for helferlist
#[derive(Parser)]
#[command(
    name = "helferlist",
    version = env!("CARGO_PKG_VERSION"),
    about = "Helper lists for event organizers: per-job spreadsheets, printable PDF shift plans and nutrition statistics",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.helferlist/helferlist.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with default settings
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List settings missing from the configuration file")]
        check: bool,
    },

    /// Export the helper list of an event as spreadsheet or PDF
    Export {
        #[arg(long, short = 'i', value_name = "FILE", help = "Event data (.json, .yaml or .yml)")]
        input: PathBuf,

        #[arg(long, value_enum, help = "Output format (default from configuration)")]
        format: Option<ExportFormat>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: '<event> - <job>.<ext>' in the current directory)"
        )]
        file: Option<PathBuf>,

        #[arg(long, value_name = "NAME", help = "Export only this job")]
        job: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Only shifts on this day, without coordinators")]
        date: Option<String>,

        #[arg(
            long,
            value_name = "LIST",
            help = "Columns: name,email,phone,shirt,nutrition,foodhandling,comment (or all/none)"
        )]
        columns: Option<String>,

        #[arg(long = "no-sensitive", help = "Leave out phone numbers")]
        no_sensitive: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Nutrition statistics and shift occupancy of an event
    Stats {
        #[arg(long, short = 'i', value_name = "FILE", help = "Event data (.json, .yaml or .yml)")]
        input: PathBuf,
    },
}
