use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a delivery sink. The observer fan-out records these
/// and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliveryError {
    #[error("recipient '{recipient}' rejected the message: {reason}")]
    Rejected { recipient: String, reason: String },
}

impl DeliveryError {
    pub fn rejected(recipient: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            recipient: recipient.into(),
            reason: reason.into(),
        }
    }
}

/// Lookup failures from the shape and car factories.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactoryError {
    #[error("unknown shape '{0}' (expected circle, rectangle or square)")]
    UnknownShape(String),

    #[error("unknown car segment '{0}' (expected Economic, Luxury or Premium)")]
    UnknownSegment(String),

    #[error("no {segment} model is offered at price {price}")]
    NoModelForPrice { segment: String, price: u64 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse restock config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid restock config: {0}")]
    Invalid(String),
}
