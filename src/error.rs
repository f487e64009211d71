use std::path::PathBuf;

/// Failure to turn a response body into an entity. Nothing partial is kept.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode {entity}: {source}")]
pub struct DecodeError {
    /// Name of the top-level entity being decoded, e.g. "Player".
    pub entity: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub fn new(entity: &'static str, source: serde_json::Error) -> Self {
        Self { entity, source }
    }

    pub fn line(&self) -> usize {
        self.source.line()
    }

    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// The body was valid JSON but a field had the wrong shape.
    pub fn is_data(&self) -> bool {
        self.source.is_data()
    }

    /// The body was not valid JSON, or ended early.
    pub fn is_syntax(&self) -> bool {
        self.source.is_syntax() || self.source.is_eof()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment or the .env file")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}
