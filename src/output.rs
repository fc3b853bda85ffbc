//! Logging setup.

use std::fmt;
use std::fs::File;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, EnvFilter, Registry,
};

/// HH:MM:SS (UTC) timestamps.
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        write!(w, "{:02}:{:02}:{:02}", (secs / 3600) % 24, (secs / 60) % 60, secs % 60)
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Send log output to `path`, or to stdout when `None`.
///
/// Falls back to stdout if the file cannot be created. Calling this twice
/// is harmless: the second global subscriber is ignored.
pub fn setup_output(path: Option<&Path>) {
    if let Some(path) = path {
        match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false);
                let _ = Registry::default().with(filter()).with(file_layer).try_init();
                return;
            }
            Err(err) => eprintln!("Could not create log file {}: {err}", path.display()),
        }
    }

    let stdout_layer = layer()
        .with_writer(std::io::stdout)
        .with_timer(SecondPrecisionTimer)
        .with_ansi(true);
    let _ = Registry::default().with(filter()).with(stdout_layer).try_init();
    info!("Logging to stdout");
}
