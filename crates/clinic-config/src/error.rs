use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `CLINIC_*` variable could not be read or merged.
    #[error("failed to read clinic configuration: {0}")]
    Load(#[from] figment::Error),

    /// A setting parsed but cannot be used, e.g. an empty data directory.
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
