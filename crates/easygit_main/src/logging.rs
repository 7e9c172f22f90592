use easygit_env::Environment;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Variable holding the log filter, e.g. `EASYGIT_LOG=easygit=debug`.
const LOG_ENV: &str = "EASYGIT_LOG";

/// Sends logs to `<base_path>/logs/easygit.log.<date>` so the interactive
/// terminal stays clean.
///
/// The returned guard flushes the writer on drop and must live as long as
/// the application. `None` means logging is disabled because the log
/// directory could not be created.
pub fn init_logging(env: &Environment) -> Option<WorkerGuard> {
    let log_dir = env.log_path();
    if let Err(error) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {}: {error}", log_dir.display());
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "easygit.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("easygit=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .compact(),
        )
        .try_init()
        .ok();

    Some(guard)
}
