use thiserror::Error;
use validator::ValidationErrors;

/// Rejections raised while editing or validating block configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid block configuration: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("{kind} needs at least {min} entries")]
    TooFewCandidates { kind: &'static str, min: usize },

    #[error("entry {index} has a weight that is negative or not a number")]
    InvalidWeight { index: usize },

    #[error("duplicate candidate id `{0}`")]
    DuplicateId(String),

    #[error("index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("bet {0} is not one of the configured bet options")]
    UnknownBet(u64),

    #[error("at least one bet option is required")]
    NoBetOptions,

    #[error("bet options must be greater than zero")]
    ZeroBet,

    #[error("`{0}` is not a supported color")]
    InvalidColor(String),

    #[error("unknown block type `{0}`")]
    UnknownBlockType(String),

    #[error("block `{id}`: {source}")]
    InBlock {
        id: String,
        #[source]
        source: Box<ConfigError>,
    },
}
