use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("understood modifier extensions are only checked when schema validation is on")]
    SchemaSettingsWithoutSchema,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("YAML configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),
}
