//! paste - merge corresponding or subsequent lines of files
//!
//! ```bash
//! paste a.txt b.txt            # a[i] TAB b[i] per line
//! paste -d, - - < list.txt     # two lines of stdin per output line
//! paste -s -d '\t\n' data.txt  # join a file's lines, alternating tab/newline
//! ```

use std::io::{self, BufWriter};
use std::process::ExitCode;

use mochi_paste::{Config, Paste, PasteError};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), PasteError> {
    let config = Config::from_args(std::env::args_os())?;
    let mut paste = Paste::from_config(&config)?;
    tracing::debug!(mode = ?paste.mode(), "starting");

    let stdout = io::stdout();
    paste.run(BufWriter::new(stdout.lock()))
}
