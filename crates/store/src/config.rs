use shared_types::{AppConfig, AppError};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Default config file path, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `CONFIG_PATH`.
const CONFIG_PATH_ENV: &str = "DASHBOARD_CONFIG";

/// Parse a config file. A missing file is an error here; `load_config`
/// decides what to do with it.
pub fn read_config(path: impl AsRef<Path>) -> Result<AppConfig, AppError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::not_found(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&contents)
        .map_err(|e| AppError::bad_request(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read the config file once and keep it for the process lifetime.
///
/// Falls back to defaults when the file is missing or unparseable.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());

        match read_config(&path) {
            Ok(config) => {
                tracing::info!(
                    path = %path,
                    policy = ?config.bookings.transition_policy,
                    timezone = ?config.schedule.timezone,
                    "Loaded config"
                );
                config
            }
            Err(e) if e.is_not_found() => {
                tracing::info!(path = %path, "No config file, using defaults");
                AppConfig::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid config file, using defaults");
                AppConfig::default()
            }
        }
    })
}
