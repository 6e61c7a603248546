use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Append logs to `<data_dir>/financetrack.log`. The terminal belongs to the
/// UI, so nothing is written to stdout or stderr. `RUST_LOG` overrides the
/// configured level. If the file cannot be opened, logging stays off.
pub fn setup_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if std::fs::create_dir_all(settings.data_path()).is_err() {
        return;
    }
    let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(settings.log_path())
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Arc::new(log_file))
        .try_init();
}
