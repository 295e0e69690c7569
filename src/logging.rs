use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Sends log output to `log_file`. The terminal belongs to the editor UI, so nothing is written
/// to stdout or stderr. Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_logging(log_file: &Path) -> std::io::Result<()> {
    if let Some(dir) = log_file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let file = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(log_file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
