use {
    tracing::Level,
    tracing_subscriber::{
        prelude::*,
        filter::filter_fn,
    },
    yt_comments_core::config::LoggingConfig,
};

const HTTP_TARGETS: [&str; 3] = ["hyper", "reqwest", "rustls"];

pub fn init_logging(config: &LoggingConfig) {
    let max_level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let quiet_http = filter_fn(|metadata| {
        if HTTP_TARGETS.iter().any(|target| metadata.target().starts_with(target)) {
            metadata.level() <= &Level::WARN
        } else {
            true
        }
    });

    // stdout is reserved for the chart
    if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(max_level)
            .with_writer(std::io::stderr)
            .finish()
            .with(quiet_http)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_writer(std::io::stderr)
            .finish()
            .with(quiet_http)
            .init();
    }
}
