use crate::utils::error::{Result, WorkloadError};
use crate::utils::validation::{
    parse_flag, parse_number, parse_single_char, validate_filler, validate_positive_number,
    validate_range, Validate,
};

pub const CONTAINER_ID_VAR: &str = "CONTAINER_NUMBER";
pub const PRIME_LIMIT_VAR: &str = "WORKLOAD_PRIME_LIMIT";
pub const MEMORY_MB_VAR: &str = "WORKLOAD_MEMORY_MB";
pub const FILLER_VAR: &str = "WORKLOAD_FILLER";
pub const MATRIX_SIZE_VAR: &str = "WORKLOAD_MATRIX_SIZE";
pub const MONITOR_VAR: &str = "WORKLOAD_MONITOR";
pub const LOG_FORMAT_VAR: &str = "WORKLOAD_LOG_FORMAT";

pub const UNKNOWN_CONTAINER: &str = "unknown";
pub const DEFAULT_PRIME_LIMIT: u64 = 1000;
pub const DEFAULT_MEMORY_MB: usize = 100;
pub const DEFAULT_FILLER: char = 'X';
pub const DEFAULT_MATRIX_SIZE: usize = 500;

/// Largest matrix whose entry sum still fits in a `u64`.
pub const MAX_MATRIX_SIZE: usize = 65_536;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(WorkloadError::InvalidConfigValueError {
                field: LOG_FORMAT_VAR.to_string(),
                value: other.to_string(),
                reason: "Expected 'compact' or 'json'".to_string(),
            }),
        }
    }
}

/// Everything a run needs, resolved once at startup from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
    pub container_id: String,
    pub prime_limit: u64,
    pub memory_mb: usize,
    pub filler: char,
    pub matrix_size: usize,
    pub monitor: bool,
    pub log_format: LogFormat,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            container_id: UNKNOWN_CONTAINER.to_string(),
            prime_limit: DEFAULT_PRIME_LIMIT,
            memory_mb: DEFAULT_MEMORY_MB,
            filler: DEFAULT_FILLER,
            matrix_size: DEFAULT_MATRIX_SIZE,
            monitor: false,
            log_format: LogFormat::Compact,
        }
    }
}

/// The identifier is used verbatim; only an unset variable falls back to `unknown`.
pub fn resolve_container_id(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN_CONTAINER.to_string())
}

impl WorkloadConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Resolves the configuration against an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            container_id: resolve_container_id(lookup(CONTAINER_ID_VAR)),
            ..Self::default()
        };

        if let Some(raw) = lookup(PRIME_LIMIT_VAR) {
            config.prime_limit = parse_number(PRIME_LIMIT_VAR, &raw)?;
        }
        if let Some(raw) = lookup(MEMORY_MB_VAR) {
            config.memory_mb = parse_number(MEMORY_MB_VAR, &raw)?;
        }
        if let Some(raw) = lookup(FILLER_VAR) {
            config.filler = parse_single_char(FILLER_VAR, &raw)?;
        }
        if let Some(raw) = lookup(MATRIX_SIZE_VAR) {
            config.matrix_size = parse_number(MATRIX_SIZE_VAR, &raw)?;
        }
        if let Some(raw) = lookup(MONITOR_VAR) {
            config.monitor = parse_flag(MONITOR_VAR, &raw)?;
        }
        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw.parse()?;
        }

        Ok(config)
    }
}

impl Validate for WorkloadConfig {
    fn validate(&self) -> Result<()> {
        let prime_limit = usize::try_from(self.prime_limit).unwrap_or(usize::MAX);
        validate_positive_number(PRIME_LIMIT_VAR, prime_limit, 1)?;
        validate_range(MATRIX_SIZE_VAR, self.matrix_size, 1, MAX_MATRIX_SIZE)?;
        validate_filler(FILLER_VAR, self.filler)?;
        Ok(())
    }
}
