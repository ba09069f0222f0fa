// Environment detection and logging setup.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Runtime environment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvMode {
    Development,
    Production,
    Test,
}

static ENV_MODE: OnceLock<EnvMode> = OnceLock::new();

/// Detect the current environment from `SYNCLINE_ENV` or `RUST_ENV`.
/// The result is cached for the lifetime of the process.
pub fn detect_env_mode() -> EnvMode {
    *ENV_MODE.get_or_init(|| {
        match std::env::var("SYNCLINE_ENV")
            .or_else(|_| std::env::var("RUST_ENV"))
            .as_deref()
        {
            Ok("production") => EnvMode::Production,
            Ok("test") => EnvMode::Test,
            _ => EnvMode::Development,
        }
    })
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the level defaults to
/// `info` in production and `debug` elsewhere. Call once at startup.
pub fn init_logger() {
    let default_directive = match detect_env_mode() {
        EnvMode::Production => "syncline=info",
        _ => "syncline=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();
}
