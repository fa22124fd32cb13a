use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file.
pub const LOG_FILE_ENV: &str = "ARACY_LOG";

/// Initialize tracing.
///
/// Logs go to stderr unless `ARACY_LOG` names a file path. Log files are
/// created with unique names so concurrent runs don't clobber each other:
/// `{path}.{timestamp}.{pid}`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init();
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_log_path_appends_pid() {
        let path = unique_log_path("/tmp/aracy.log");
        assert!(path.starts_with("/tmp/aracy.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
