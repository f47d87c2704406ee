//! Mochi Paste Library
//!
//! An implementation of the POSIX `paste` utility. This crate provides:
//!
//! - `delimiter`: delimiter list decoding and cyclic lookup
//! - `stream`: named character inputs (`-` is stdin) and the output writer
//! - `merge`: the parallel and sequential line mergers
//! - `config`: command-line parsing and validation
//! - `paste`: the driver that ties one run together
//!
//! ```no_run
//! use mochi_paste::{Config, Paste};
//!
//! # fn main() -> mochi_paste::Result<()> {
//! let config = Config::from_args(["paste", "-d,", "a.txt", "b.txt"])?;
//! Paste::from_config(&config)?.run(std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod delimiter;
pub mod error;
pub mod merge;
pub mod paste;
pub mod stream;

pub use config::{CliArgs, Config};
pub use delimiter::{Delimiter, DelimiterList};
pub use error::{PasteError, Result};
pub use merge::MergeMode;
pub use paste::Paste;
