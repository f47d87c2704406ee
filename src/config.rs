//! Command-line configuration
//!
//! `paste` reads no config file and no environment. Everything comes from
//! the command line, parsed by clap and then validated into a [`Config`].

use std::ffi::{OsStr, OsString};

use clap::Parser;

use crate::delimiter::DelimiterList;
use crate::error::{PasteError, Result};
use crate::merge::MergeMode;

/// CLI arguments for paste
#[derive(Parser, Debug, Clone)]
#[command(name = "paste")]
#[command(about = "Merge corresponding or subsequent lines of files", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct CliArgs {
    /// Join all lines of each file in turn instead of one line per file
    #[arg(short = 's', long = "serial")]
    pub serial: bool,

    /// Delimiters to use, cycled; escapes \n \t \\ and \0 (empty) are recognised
    #[arg(short = 'd', long = "delimiters", value_name = "LIST", allow_hyphen_values = true)]
    pub delimiters: Option<OsString>,

    /// Input files; `-` reads standard input
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<OsString>,
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: MergeMode,
    pub delimiters: DelimiterList,
    pub files: Vec<OsString>,
}

impl Config {
    /// Parse and validate a full argument vector (program name first).
    ///
    /// # Errors
    ///
    /// Returns [`PasteError::Usage`] for malformed arguments, including
    /// any flag other than `-s` and `-d`. Repeated flags are accepted; the
    /// last `-d` wins.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = CliArgs::try_parse_from(args).map_err(|e| {
            tracing::debug!(error = %e, "argument parsing failed");
            PasteError::Usage
        })?;
        Self::from_cli(cli)
    }

    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`PasteError::InvalidDelimiter`] if the delimiter list is not
    /// valid UTF-8, [`PasteError::EmptyDelimiterSet`] if it decodes to
    /// nothing, and [`PasteError::Usage`] if no file is named.
    pub fn from_cli(cli: CliArgs) -> Result<Self> {
        if cli.files.is_empty() {
            return Err(PasteError::Usage);
        }

        let delimiters = match cli.delimiters.as_deref() {
            Some(list) => parse_delimiters(list)?,
            None => DelimiterList::default(),
        };

        let mode = if cli.serial {
            MergeMode::Sequential
        } else {
            MergeMode::Parallel
        };

        Ok(Self {
            mode,
            delimiters,
            files: cli.files,
        })
    }
}

fn parse_delimiters(list: &OsStr) -> Result<DelimiterList> {
    let text = list.to_str().ok_or(PasteError::InvalidDelimiter)?;
    DelimiterList::parse(text)
}
