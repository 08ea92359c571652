use std::sync::Once;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Target prefix shared by every javagen crate (`javagen.imports`, `javagen_model::class`, ...).
pub const JAVAGEN_TARGET: &str = "javagen";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level for the javagen crates: a simple level (`info`, `debug`, ...) or a full
    /// `tracing_subscriber::EnvFilter` directive string, used verbatim.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Level for everything outside javagen when `level` is a simple level.
    #[serde(default = "LoggingConfig::default_dependency_level")]
    pub dependency_level: String,

    /// Emit logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    fn default_dependency_level() -> String {
        "warn".to_owned()
    }

    /// Map a simple level name to its directive; `None` for anything else.
    fn simple_level(input: &str) -> Option<&'static str> {
        match input.trim().to_ascii_lowercase().as_str() {
            "" | "info" => Some("info"),
            "trace" => Some("trace"),
            "debug" => Some("debug"),
            "warn" | "warning" => Some("warn"),
            "error" => Some("error"),
            "off" => Some("off"),
            _ => None,
        }
    }

    /// The filter directives described by this config, before `RUST_LOG` is applied.
    pub fn directives(&self) -> String {
        match Self::simple_level(&self.level) {
            Some(level) => {
                let others = Self::simple_level(&self.dependency_level).unwrap_or("warn");
                format!("{others},{JAVAGEN_TARGET}={level}")
            }
            None => self.level.trim().to_owned(),
        }
    }

    /// The effective filter: the configured directives, with `RUST_LOG` appended when set.
    ///
    /// Falls back to the configured directives alone if the combination does not parse, and to
    /// `info` for javagen if neither does.
    pub fn env_filter(&self) -> EnvFilter {
        let configured = self.directives();
        let from_env = std::env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());

        from_env
            .iter()
            .map(|env| format!("{configured},{}", env.trim()))
            .chain(std::iter::once(configured.clone()))
            .find_map(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(format!("warn,{JAVAGEN_TARGET}=info")))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            dependency_level: Self::default_dependency_level(),
            json: false,
        }
    }
}

/// Install the global `tracing` subscriber described by `config`.
///
/// Only the first call in a process has an effect. Returns `true` if this call installed the
/// subscriber.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        let filter = config.env_filter();

        // `TestWriter` routes output through the stdlib print macros so `cargo test` can capture
        // it.
        let layer: Box<dyn tracing_subscriber::Layer<_> + Send + Sync> = if config.json {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(tracing_subscriber::fmt::writer::TestWriter::with_stderr)
                .with_ansi(false)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(tracing_subscriber::fmt::writer::TestWriter::with_stderr)
                .with_ansi(false)
                .boxed()
        };

        installed = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .is_ok();
    });
    installed
}
