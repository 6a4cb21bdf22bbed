// src/error.rs
use thiserror::Error;

use crate::core::net::TransportError;

#[derive(Debug, Error)]
pub enum Error {
    /// The transport could not deliver a week page.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Anchor text whose start time is not `HH:MM`.
    #[error("malformed time text: {0:?}")]
    MalformedTimeText(String),

    /// A start/end replacement would put the end before the start.
    #[error("time span ends before it starts")]
    InvertedSpan,
}

pub type Result<T> = std::result::Result<T, Error>;
