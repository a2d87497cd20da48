use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    std::env::var("RANGEBENCH_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(DEFAULT_FILTER),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
}

/// Opens `path` for appending, creating missing parent directories.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be created.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber writing plain-text records to `log_path`.
///
/// Falls back to stderr when the file cannot be opened. Only the first call
/// takes effect.
pub fn init_logging(log_path: &Path) {
    let builder = FmtSubscriber::builder()
        .with_env_filter(env_filter())
        .with_ansi(false);

    let result = match open_log_file(log_path) {
        Ok(file) => tracing::subscriber::set_global_default(
            builder.with_writer(Mutex::new(file)).finish(),
        ),
        Err(err) => {
            let result = tracing::subscriber::set_global_default(
                builder.with_writer(std::io::stderr).finish(),
            );
            tracing::warn!(
                path = %log_path.display(),
                error = %err,
                "Failed to open log file, logging to stderr"
            );
            result
        }
    };

    if let Err(err) = result {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn open_log_file_creates_parents_and_appends() -> Result<(), String> {
        let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
        let path = dir.path().join("logs").join("nested").join("run.log");

        for line in ["first\n", "second\n"] {
            let mut file =
                open_log_file(&path).map_err(|err| format!("open failed: {}", err))?;
            file.write_all(line.as_bytes())
                .map_err(|err| format!("write failed: {}", err))?;
        }

        let content =
            std::fs::read_to_string(&path).map_err(|err| format!("read failed: {}", err))?;
        if content != "first\nsecond\n" {
            return Err(format!("Unexpected log content: {:?}", content));
        }
        Ok(())
    }

    #[test]
    fn init_logging_is_idempotent() -> Result<(), String> {
        let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
        let path = dir.path().join("rangebench.log");
        init_logging(&path);
        init_logging(&path);
        Ok(())
    }
}
