use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global `tracing` subscriber.
///
/// Reads config from environment (after loading `.env`):
///   - `RUST_LOG`: filter directives (default: `info`)
///   - `DASHBOARD_LOG_JSON`: `true`/`1` for JSON lines instead of text
///
/// Only the first call has effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let json = env_bool("DASHBOARD_LOG_JSON", false);

        let result = if json {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .try_init()
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "Tracing subscriber already installed");
        }
    });
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|v| parse_bool(&v).unwrap_or(default))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
