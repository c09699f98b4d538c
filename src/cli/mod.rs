// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code.
//!
//! Only two things should be public in this module: [Args] (with its
//! [run](Args::run)) and [BstError]. The decode and transform modules do no
//! logging of their own; all user-facing chatter lives here.

mod error;
mod export;
mod inspect;

pub use error::BstError;

use std::path::PathBuf;

use clap::{AppSettings, Parser};
use log::info;

#[derive(Parser)]
#[clap(
    name = "ilofar_bst",
    version,
    about = "Decode and transform I-LOFAR beamlet statistics (BST) data"
)]
#[clap(global_setting(AppSettings::ArgRequiredElseHelp))]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(global_setting(AppSettings::InferLongArgs))]
#[clap(global_setting(AppSettings::InferSubcommands))]
#[clap(global_setting(AppSettings::PropagateVersion))]
pub enum Args {
    /// Decode BST capture files and print their dimensions, time span and
    /// frequency coverage.
    Inspect {
        /// Paths to mode-357 BST capture files.
        #[clap(name = "DATA_FILES", parse(from_os_str), required = true)]
        files: Vec<PathBuf>,

        /// The verbosity of the program. Increase by specifying multiple
        /// times (e.g. -vv). The default is to print only high-level
        /// information.
        #[clap(short, long, parse(from_occurrences))]
        verbosity: u8,
    },

    /// Decode a BST capture file, optionally crop it and subtract a
    /// background, then write the grid as CSV (one row per time sample).
    Export {
        /// Path to a mode-357 BST capture file.
        #[clap(name = "DATA_FILE", parse(from_os_str))]
        file: PathBuf,

        /// Path to the output CSV file.
        #[clap(short, long, parse(from_os_str))]
        output: PathBuf,

        /// Keep only times at or after this timestamp (YYYYMMDD_HHMMSS or
        /// YYYY-MM-DDTHH:MM:SS).
        #[clap(long)]
        start: Option<String>,

        /// Keep only times at or before this timestamp.
        #[clap(long)]
        end: Option<String>,

        /// Keep only channels at or above this frequency (e.g. 20MHz,
        /// 8500kHz; a naked number is MHz).
        #[clap(long)]
        freq_start: Option<String>,

        /// Keep only channels at or below this frequency.
        #[clap(long)]
        freq_end: Option<String>,

        /// Normalise against the mean spectrum of the quietest times.
        #[clap(long, conflicts_with = "background-sub2")]
        background_sub1: bool,

        /// The standard-deviation percentile below which a time is
        /// considered quiet (used with --background-sub1).
        #[clap(long, default_value = "1.0")]
        percentile: f64,

        /// Normalise each frequency channel by its own mean.
        #[clap(long)]
        background_sub2: bool,

        /// The verbosity of the program. Increase by specifying multiple
        /// times (e.g. -vv). The default is to print only high-level
        /// information.
        #[clap(short, long, parse(from_occurrences))]
        verbosity: u8,
    },
}

impl Args {
    pub fn run(self) -> Result<(), BstError> {
        let verbosity = match &self {
            Args::Inspect { verbosity, .. } => *verbosity,
            Args::Export { verbosity, .. } => *verbosity,
        };
        setup_logging(verbosity).expect("Failed to initialise logging.");

        let sub_command = match &self {
            Args::Inspect { .. } => "inspect",
            Args::Export { .. } => "export",
        };
        info!("ilofar_bst {} {}", sub_command, env!("CARGO_PKG_VERSION"));

        match self {
            Args::Inspect { files, .. } => inspect::inspect(&files)?,

            Args::Export {
                file,
                output,
                start,
                end,
                freq_start,
                freq_end,
                background_sub1,
                percentile,
                background_sub2,
                ..
            } => export::export(export::ExportParams {
                file,
                output,
                start,
                end,
                freq_start,
                freq_end,
                background_sub1,
                percentile,
                background_sub2,
            })?,
        }

        info!("ilofar_bst {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g.
/// a terminal); piped output will be formatted sensibly.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        _ => builder.filter_level(log::LevelFilter::Trace),
    };
    builder.init();

    Ok(())
}
