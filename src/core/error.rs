use thiserror::Error;

#[derive(Error, Debug)]
pub enum CensusError {
    #[error("Malformed pattern for {form}: {reason}")]
    MalformedPattern { form: String, reason: String },

    #[error("Unknown life form: {0}")]
    UnknownForm(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Run already finished after {0} generations")]
    RunFinished(u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CensusError>;
