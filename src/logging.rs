use crate::persistence::files::ensure_parent_dir;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

/// Filter used when RUST_LOG is not set
pub const DEFAULT_FILTER: &str = "dsa_progress=info";

/// Install the global tracing subscriber.
///
/// Output goes to `log_file` so the terminal UI is left alone. If the file
/// cannot be opened, diagnostics are dropped.
pub fn init(log_file: &Path) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let writer = match open_log(log_file) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(io::sink),
    };

    // A subscriber may already be installed (tests); keep the first one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
}

fn open_log(path: &Path) -> io::Result<File> {
    ensure_parent_dir(path)?;
    OpenOptions::new().create(true).append(true).open(path)
}
