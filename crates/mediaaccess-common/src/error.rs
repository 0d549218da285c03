//! Unified error type for mediaaccess.
//!
//! Registry, lookup, and backend failures all funnel into [`Error`], which
//! carries enough context for the transport layer to derive a response code
//! via [`Error::http_status`]. Missing files are not errors; they are reported
//! through a not-found file descriptor instead.

use std::fmt;

use crate::ids::ProviderId;
use crate::types::CapabilityKind;

/// Common error type for mediaaccess.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No backend is registered for this (kind, id) pair.
    #[error("No {kind} provider registered with id {id}")]
    ProviderNotFound {
        /// Capability kind that was searched.
        kind: CapabilityKind,
        /// The provider id that was requested.
        id: ProviderId,
    },

    /// Two backends tried to register under the same (kind, id) pair.
    #[error("Duplicate {kind} provider id {id}")]
    DuplicateProvider {
        /// Capability kind of both registrations.
        kind: CapabilityKind,
        /// The clashing provider id.
        id: ProviderId,
    },

    /// The id has no match within the resolved provider.
    #[error("{entity} not found: {id}")]
    EntityNotFound {
        /// The kind of entity (e.g. "movie", "tv season").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// A media type, file role, or combination of both that the service
    /// does not know about.
    #[error("Invalid media type: {0}")]
    InvalidMediaType(String),

    /// The backend plugin itself failed. The message is passed through as-is.
    #[error("{kind} provider {provider} failed: {source}")]
    Backend {
        /// Capability kind of the failing backend.
        kind: CapabilityKind,
        /// Provider id of the failing backend.
        provider: ProviderId,
        /// The underlying backend error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or composition was rejected.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::ProviderNotFound { .. } => 404,
            Error::EntityNotFound { .. } => 404,
            Error::InvalidMediaType(_) => 400,
            Error::Backend { .. } => 502,
            Error::DuplicateProvider { .. } => 500,
            Error::Io(_) => 500,
            Error::Config(_) => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Convenience constructor for [`Error::ProviderNotFound`].
    pub fn provider_not_found(kind: CapabilityKind, id: ProviderId) -> Self {
        Error::ProviderNotFound { kind, id }
    }

    /// Convenience constructor for [`Error::EntityNotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::EntityNotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Convenience constructor for [`Error::Backend`].
    pub fn backend(
        kind: CapabilityKind,
        provider: ProviderId,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Backend {
            kind,
            provider,
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::Config`].
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
