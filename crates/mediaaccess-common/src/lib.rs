//! Mediaaccess-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across mediaaccess:
//!
//! - **Typed IDs**: [`ProviderId`], the small integer that addresses one backend
//!   within a capability kind
//! - **Core Types**: Closed enumerations for capability kinds, media types,
//!   file roles, and sort keys
//! - **Path Utilities**: Functions to detect file types by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use mediaaccess_common::{CapabilityKind, Error, ProviderId, Result, WebMediaType};
//! use mediaaccess_common::paths::is_image_file;
//! use std::path::Path;
//!
//! // Provider ids are only meaningful together with a capability kind
//! let provider = ProviderId::new(3);
//! assert_eq!(WebMediaType::TvSeason.capability(), CapabilityKind::TvShow);
//!
//! // Check file types
//! assert!(is_image_file(Path::new("poster.jpg")));
//!
//! // Use common error types
//! fn example(provider: ProviderId) -> Result<()> {
//!     Err(Error::provider_not_found(CapabilityKind::Movie, provider))
//! }
//! assert!(example(provider).is_err());
//! ```

pub mod error;
pub mod ids;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
