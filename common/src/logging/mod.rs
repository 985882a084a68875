use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber: stdout always, plus a plain-text file layer
/// when a file appender is given.
pub fn init_logging(
    rust_log: &str,
    non_blocking_stdout: NonBlocking,
    non_blocking_file: Option<RollingFileAppender>,
) {
    let file_layer = non_blocking_file.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_file(true)
            .with_ansi(false)
            .with_line_number(true)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(rust_log))
        .with(file_layer)
        //stdout
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_stdout)
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .init();
}

/// Filter used when `RUST_LOG` is unset: third-party crates at info, ours at `level`.
pub fn default_filter(crate_name: &str, level: &str) -> String {
    format!("info,common={level},{crate_name}={level}")
}
