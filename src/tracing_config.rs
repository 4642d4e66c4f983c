//! Log output for a generation run. Nothing is installed unless `TSBIND_LOG`
//! or `RUST_LOG` is set.
//!
//! `TSBIND_LOG_FORMAT=tree` nests resolver and merger events under the
//! interface being projected; `json` writes one object per line. Anything
//! else prints plain text. Logs always go to stderr so they never mix with
//! the run summary.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "TSBIND_LOG";
pub const LOG_FORMAT_ENV: &str = "TSBIND_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

pub fn init_tracing() {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() => {
            EnvFilter::from_default_env()
        }
        Err(_) => return,
    };
    let format = LogFormat::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default());

    let registry = Registry::default().with(filter);
    match format {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
