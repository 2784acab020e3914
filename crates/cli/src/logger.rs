/// Define log format used
///
/// Defaults to `Basic` when building in debug profile, `Json` when building in release profile
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[cfg_attr(debug_assertions, default)]
    Basic,
    Pretty,
    #[cfg_attr(not(debug_assertions), default)]
    Json,
}

/// Initializing logging facilities
///
/// Log filtering is configured with env var in this priority order:
/// - `log_filter` parameter
/// - `TASTYFORMS_LOG` env variable, formatted for [tracing_subscriber::EnvFilter]
/// - `RUST_LOG` "standard" env variable, also formatted for [tracing_subscriber::EnvFilter]
///
/// Logs go to stderr so that command output on stdout stays clean.
pub fn init(log_format: LogFormat, log_filter: Option<String>) {
    use std::env;

    use tracing::Level;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let fmt_layer = match log_format {
        LogFormat::Basic => fmt_layer.without_time().boxed(),
        LogFormat::Pretty => fmt_layer.pretty().boxed(),
        LogFormat::Json => fmt_layer.json().boxed(),
    };

    let filter_layer = {
        let directives = log_filter
            .or_else(|| env::var("TASTYFORMS_LOG").ok())
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_default();

        EnvFilter::builder()
            .with_default_directive(Level::INFO.into())
            .parse_lossy(directives)
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
