use std::io::stderr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::prelude::*;

/// Initialize logging.
///
/// The returned guard must be kept alive for the duration of the program,
/// otherwise buffered log lines are lost on exit.
pub fn init() -> Result<WorkerGuard> {
    let format_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (stderr, stderr_guard) = tracing_appender::non_blocking(stderr());
    let subscriber_layer = tracing_subscriber::fmt::layer()
        .with_writer(stderr)
        .without_time()
        .with_filter(format_filter);

    tracing_subscriber::Registry::default().with(subscriber_layer).try_init()?;
    Ok(stderr_guard)
}
