use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub is_dev: bool,
    pub enable_file: bool,
}

fn otel_filter() -> EnvFilter {
    let mut filter = EnvFilter::new("info");
    for noisy in ["hyper", "opentelemetry", "tonic", "h2", "reqwest", "sqlx"] {
        if let Ok(directive) = format!("{noisy}=off").parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Console output honours `RUST_LOG` and defaults to `info`. The JSON file
/// layer and the OpenTelemetry bridge are only attached when enabled.
pub fn init_logger(
    sdk_logger_provider: Option<&SdkLoggerProvider>,
    component: &str,
    options: LogOptions,
) {
    let file_layer = options.enable_file.then(|| {
        let log_dir = if options.is_dev { "./logs" } else { "/var/log/app" };

        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        // the writer must outlive main
        std::mem::forget(guard);

        fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"))
    });

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = if options.is_dev {
        fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_ansi(false)
            .with_filter(console_filter)
            .boxed()
    };

    let otel_layer = sdk_logger_provider
        .map(|provider| OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter()));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .init();
}
