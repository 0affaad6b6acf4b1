use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::screening::{DegreeMatchPolicy, UnknownDegreePolicy, Vocabulary};

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
    pub screening: ScreeningConfig,
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

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            screening: ScreeningConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Vocabulary and classification settings for the screening engine.
#[derive(Debug, Clone, Default)]
pub struct ScreeningConfig {
    pub skills_file: Option<PathBuf>,
    /// Skills read from `skills_file`; `None` keeps the built-in list.
    pub skills: Option<Vec<String>>,
    pub degree_policy: DegreeMatchPolicy,
}

impl ScreeningConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let degree_policy = match env::var("SCREENING_DEGREE_POLICY") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .parse::<DegreeMatchPolicy>()
                .map_err(|source| ConfigError::InvalidDegreePolicy { source })?,
            _ => DegreeMatchPolicy::default(),
        };

        let skills_file = env::var("SCREENING_SKILLS_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let skills = match &skills_file {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|source| {
                    ConfigError::SkillsFile {
                        path: path.clone(),
                        source,
                    }
                })?;
                Some(parse_skill_list(&contents))
            }
            None => None,
        };

        Ok(Self {
            skills_file,
            skills,
            degree_policy,
        })
    }

    pub fn vocabulary(&self) -> Vocabulary {
        match &self.skills {
            Some(skills) => Vocabulary::with_skills(skills.iter().cloned()),
            None => Vocabulary::default(),
        }
    }
}

/// One skill per line; blank lines and `#` comments are ignored.
fn parse_skill_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    SkillsFile { path: PathBuf, source: std::io::Error },
    InvalidDegreePolicy { source: UnknownDegreePolicy },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::SkillsFile { path, .. } => {
                write!(
                    f,
                    "SCREENING_SKILLS_FILE '{}' could not be read",
                    path.display()
                )
            }
            ConfigError::InvalidDegreePolicy { source } => {
                write!(f, "SCREENING_DEGREE_POLICY is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::SkillsFile { source, .. } => Some(source),
            ConfigError::InvalidDegreePolicy { source } => Some(source),
        }
    }
}
