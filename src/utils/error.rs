use crate::domain::model::Sport;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepthChartError {
    #[error("'{code}' is not a valid {sport} position.")]
    InvalidPosition { code: String, sport: Sport },

    #[error("Unknown sport: '{name}'")]
    UnknownSport { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DepthChartError {
    /// 錯誤是否來自 position / sport 驗證（而非設定檔或 IO）
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DepthChartError::InvalidPosition { .. } | DepthChartError::UnknownSport { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DepthChartError::InvalidPosition { code, sport } => {
                format!("Position '{}' cannot be used for {}", code, sport)
            }
            DepthChartError::UnknownSport { name } => {
                format!("Sport '{}' is not supported", name)
            }
            DepthChartError::IoError(_) => "Could not read the roster file".to_string(),
            DepthChartError::TomlError(_) => "The roster file is not valid TOML".to_string(),
            DepthChartError::SerializationError(_) => {
                "Could not render the depth chart as JSON".to_string()
            }
            DepthChartError::ConfigError { message } => message.clone(),
            DepthChartError::InvalidConfigValueError { field, reason, .. } => {
                format!("Roster field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DepthChartError::InvalidPosition { sport, .. } => format!(
                "Use one of the {} positions: {}",
                sport,
                crate::core::registry::PositionRegistry::global()
                    .codes(*sport)
                    .join(", ")
            ),
            DepthChartError::UnknownSport { .. } => {
                let sports: Vec<&str> = Sport::ALL.iter().map(|s| s.as_str()).collect();
                format!("Supported sports: {}", sports.join(", "))
            }
            DepthChartError::IoError(_) => {
                "Check that the --roster path exists and is readable".to_string()
            }
            DepthChartError::TomlError(_) => {
                "Check the roster file syntax against the documented layout".to_string()
            }
            DepthChartError::SerializationError(_) => "Retry without --json".to_string(),
            DepthChartError::ConfigError { .. }
            | DepthChartError::InvalidConfigValueError { .. } => {
                "Fix the roster file and run again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DepthChartError>;
