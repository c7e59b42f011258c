use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound for the generator retry budget.
pub const MAX_GEMINI_RETRIES: u32 = 5;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub gemini: GeminiConfig,
    pub answer_log: AnswerLogConfig,
    pub drive: DriveConfig,
    pub chart: ChartConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let allowed_origin = env::var("APP_ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let gemini_defaults = GeminiConfig::default();
        let gemini = GeminiConfig {
            api_key: non_empty_var("GEMINI_API_KEY"),
            model: non_empty_var("GEMINI_MODEL").unwrap_or(gemini_defaults.model),
            api_base: non_empty_var("GEMINI_API_BASE").unwrap_or(gemini_defaults.api_base),
            timeout: seconds_var("GEMINI_TIMEOUT_SECS", gemini_defaults.timeout)?,
            max_retries: number_var("GEMINI_MAX_RETRIES", gemini_defaults.max_retries)?
                .min(MAX_GEMINI_RETRIES),
            retry_backoff: gemini_defaults.retry_backoff,
        };

        let answer_log = AnswerLogConfig {
            path: non_empty_var("ANSWER_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| AnswerLogConfig::default().path),
        };

        let drive = DriveConfig {
            service_account_key: non_empty_var("DRIVE_SERVICE_ACCOUNT_KEY").map(PathBuf::from),
            folder_id: non_empty_var("DRIVE_FOLDER_ID"),
            timeout: seconds_var("DRIVE_TIMEOUT_SECS", DriveConfig::default().timeout)?,
        };

        let chart = ChartConfig {
            endpoint: non_empty_var("CHART_ENDPOINT"),
            timeout: seconds_var("CHART_TIMEOUT_SECS", ChartConfig::default().timeout)?,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                allowed_origin,
            },
            telemetry: TelemetryConfig { log_level },
            gemini,
            answer_log,
            drive,
            chart,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn number_var(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match non_empty_var(name) {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
        None => Ok(default),
    }
}

fn seconds_var(name: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    let fallback = u32::try_from(default.as_secs()).unwrap_or(u32::MAX);
    let seconds = number_var(name, fallback)?;
    if seconds == 0 {
        return Err(ConfigError::InvalidNumber {
            name,
            value: seconds.to_string(),
        });
    }
    Ok(Duration::from_secs(u64::from(seconds)))
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Value for `Access-Control-Allow-Origin`; `*` allows any origin.
    pub allowed_origin: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Gemini `generateContent` client settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 1,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnswerLogConfig {
    pub path: PathBuf,
}

impl Default for AnswerLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/answer_log.csv"),
        }
    }
}

/// Google Drive publishing settings. Without a service account key the
/// publisher is not constructed and report requests fail with a
/// configuration error.
#[derive(Debug, Clone)]
pub struct DriveConfig {
    pub service_account_key: Option<PathBuf>,
    pub folder_id: Option<String>,
    pub timeout: Duration,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            service_account_key: None,
            folder_id: None,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Radar chart image service. Disabled when no endpoint is configured.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{name} must be a positive integer (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_ALLOWED_ORIGIN",
            "GEMINI_API_KEY",
            "GEMINI_MODEL",
            "GEMINI_API_BASE",
            "GEMINI_TIMEOUT_SECS",
            "GEMINI_MAX_RETRIES",
            "ANSWER_LOG_PATH",
            "DRIVE_SERVICE_ACCOUNT_KEY",
            "DRIVE_FOLDER_ID",
            "DRIVE_TIMEOUT_SECS",
            "CHART_ENDPOINT",
            "CHART_TIMEOUT_SECS",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.allowed_origin, "*");
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.gemini.timeout, Duration::from_secs(30));
        assert_eq!(config.gemini.max_retries, 1);
        assert_eq!(config.answer_log.path, PathBuf::from("data/answer_log.csv"));
        assert!(config.drive.service_account_key.is_none());
        assert_eq!(config.drive.timeout, Duration::from_secs(60));
        assert!(config.chart.endpoint.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn caps_retry_budget_and_reads_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GEMINI_API_KEY", "  secret ");
        env::set_var("GEMINI_MAX_RETRIES", "42");
        env::set_var("CHART_ENDPOINT", "https://quickchart.io/chart");
        env::set_var("DRIVE_FOLDER_ID", "folder-1");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini.max_retries, MAX_GEMINI_RETRIES);
        assert_eq!(
            config.chart.endpoint.as_deref(),
            Some("https://quickchart.io/chart")
        );
        assert_eq!(config.drive.folder_id.as_deref(), Some("folder-1"));
        reset_env();
    }

    #[test]
    fn rejects_invalid_numbers() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GEMINI_TIMEOUT_SECS", "soon");
        let err = AppConfig::load().expect_err("invalid timeout");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                name: "GEMINI_TIMEOUT_SECS",
                ..
            }
        ));

        reset_env();
        env::set_var("DRIVE_TIMEOUT_SECS", "0");
        assert!(AppConfig::load().is_err());
        reset_env();
    }
}
