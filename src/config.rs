use crate::components::canvas::time::{DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::error::{config_error, CanvasResult};
use chrono::Duration;
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Canvas instance queried by default
pub const DEFAULT_BASE_URL: &str = "https://learn.vccs.edu";

/// Path of the upcoming events endpoint, relative to the base URL
pub const UPCOMING_EVENTS_ENDPOINT: &str = "/api/v1/users/self/upcoming_events";

/// Credentials file read by the CLI
pub const DEFAULT_KEYS_FILE: &str = "./keys.json";

/// Port the web front ends listen on
pub const DEFAULT_PORT: u16 = 3000;

/// Optional file overrides, merged before the environment
pub const CONFIG_FILE: &str = "config/canvasboard.toml";

/// Main configuration structure shared by all front ends
#[derive(Clone)]
pub struct Config {
    /// Canvas base URL, without the API path
    pub base_url: String,
    /// Location of the CLI credentials file
    pub keys_file: PathBuf,
    /// Port for the web front ends
    pub port: u16,
    /// Timezone used when displaying due dates
    pub timezone: String,
    /// Length of the lookahead window in days
    pub window_days: i64,
    /// Token used by the JSON viewer, never compiled in
    pub viewer_token: Option<String>,
}

/// Shape of `config/canvasboard.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub keys_file: Option<PathBuf>,
    pub port: Option<u16>,
    pub timezone: Option<String>,
    pub window_days: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            keys_file: PathBuf::from(DEFAULT_KEYS_FILE),
            port: DEFAULT_PORT,
            timezone: String::from("UTC"),
            window_days: DEFAULT_WINDOW_DAYS,
            viewer_token: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("keys_file", &self.keys_file)
            .field("port", &self.port)
            .field("timezone", &self.timezone)
            .field("window_days", &self.window_days)
            .field("viewer_token", &self.viewer_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Load configuration from defaults, the optional config file and the environment
    pub fn load() -> CanvasResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let file = match fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Self::from_sources(file.as_deref(), |key| env::var(key).ok())
    }

    /// Merge a config file body and an environment lookup over the defaults
    pub fn from_sources<F>(file: Option<&str>, env_var: F) -> CanvasResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(content) = file {
            let file_config: FileConfig = toml::from_str(content)?;
            config.apply_file(file_config);
        }

        if let Some(base_url) = env_var("CANVAS_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(keys_file) = env_var("CANVAS_KEYS_FILE") {
            config.keys_file = PathBuf::from(keys_file);
        }
        if let Some(port) = env_var("PORT") {
            config.port = port
                .parse::<u16>()
                .map_err(|_| config_error(&format!("Invalid PORT: {}", port)))?;
        }
        if let Some(timezone) = env_var("TIMEZONE") {
            config.timezone = timezone;
        }
        if let Some(days) = env_var("CANVAS_WINDOW_DAYS") {
            config.window_days = days
                .parse::<i64>()
                .map_err(|_| config_error(&format!("Invalid CANVAS_WINDOW_DAYS: {}", days)))?;
        }
        config.viewer_token = env_var("CANVAS_TOKEN").filter(|t| !t.trim().is_empty());

        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if let Some(keys_file) = file.keys_file {
            self.keys_file = keys_file;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(timezone) = file.timezone {
            self.timezone = timezone;
        }
        if let Some(window_days) = file.window_days {
            self.window_days = window_days;
        }
    }

    fn validate(&self) -> CanvasResult<()> {
        if !(0..=MAX_WINDOW_DAYS).contains(&self.window_days) {
            return Err(config_error(&format!(
                "Window length must be between 0 and {} days, got {}",
                MAX_WINDOW_DAYS, self.window_days
            )));
        }
        self.tz()?;
        self.upcoming_events_url()?;
        Ok(())
    }

    /// Parsed display timezone
    pub fn tz(&self) -> CanvasResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Invalid timezone: {}", self.timezone)))
    }

    /// Lookahead window length, clamped to the accepted range
    pub fn window(&self) -> Duration {
        Duration::days(self.window_days.clamp(0, MAX_WINDOW_DAYS))
    }

    /// Full URL of the upcoming events endpoint
    pub fn upcoming_events_url(&self) -> CanvasResult<Url> {
        let joined = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            UPCOMING_EVENTS_ENDPOINT
        );
        Url::parse(&joined)
            .map_err(|e| config_error(&format!("Invalid Canvas base URL {}: {}", self.base_url, e)))
    }

    /// Token for the JSON viewer
    pub fn viewer_token(&self) -> CanvasResult<&str> {
        self.viewer_token
            .as_deref()
            .ok_or_else(|| config_error("CANVAS_TOKEN is not set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_sources(None, env_from(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, 3000);
        assert_eq!(config.window_days, 14);
        assert!(config.viewer_token.is_none());
        assert_eq!(
            config.upcoming_events_url().unwrap().as_str(),
            "https://learn.vccs.edu/api/v1/users/self/upcoming_events"
        );
    }

    #[test]
    fn test_env_overrides_file() {
        let file = r#"
            base_url = "https://file.example.com"
            window_days = 7
            timezone = "Europe/Helsinki"
        "#;
        let env = env_from(&[
            ("CANVAS_BASE_URL", "https://env.example.com/"),
            ("CANVAS_TOKEN", "secret"),
        ]);
        let config = Config::from_sources(Some(file), env).unwrap();

        // Environment wins over the file
        assert_eq!(config.base_url, "https://env.example.com/");
        // File wins over the defaults
        assert_eq!(config.window_days, 7);
        assert_eq!(config.timezone, "Europe/Helsinki");
        assert_eq!(config.viewer_token().unwrap(), "secret");
        // Trailing slash does not double up
        assert_eq!(
            config.upcoming_events_url().unwrap().as_str(),
            "https://env.example.com/api/v1/users/self/upcoming_events"
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_sources(None, env_from(&[("PORT", "http")])).is_err());
        assert!(Config::from_sources(None, env_from(&[("TIMEZONE", "Mars/Base")])).is_err());
        assert!(Config::from_sources(None, env_from(&[("CANVAS_WINDOW_DAYS", "-1")])).is_err());
        assert!(Config::from_sources(Some("colour = \"red\""), env_from(&[])).is_err());
    }

    #[test]
    fn test_window_days_bounds() {
        // Large enough to overflow chrono if it were accepted
        for days in ["200000000000000", "100000000", "3661"] {
            let result = Config::from_sources(None, env_from(&[("CANVAS_WINDOW_DAYS", days)]));
            assert!(result.is_err(), "accepted {} days", days);
        }

        let config = Config::from_sources(None, env_from(&[("CANVAS_WINDOW_DAYS", "3660")])).unwrap();
        assert_eq!(config.window(), Duration::days(3660));

        let config = Config::from_sources(None, env_from(&[("CANVAS_WINDOW_DAYS", "0")])).unwrap();
        assert_eq!(config.window(), Duration::zero());
    }

    #[test]
    fn test_window_never_panics() {
        // Fields are public, so validation can be bypassed
        let config = Config {
            window_days: i64::MAX,
            ..Default::default()
        };
        assert_eq!(config.window(), Duration::days(MAX_WINDOW_DAYS));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::from_sources(None, env_from(&[("CANVAS_TOKEN", "13096~abc")])).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("13096~abc"));
        assert!(printed.contains("<redacted>"));
    }
}
