//! Mediaaccess - Uniform access to heterogeneous media libraries
//!
//! Backends for movies, TV shows, music, pictures and plain filesystems are
//! registered under small integer provider ids and queried through one
//! [`service::MediaService`]. The library crate exposes everything the binary
//! and the integration tests need.

pub mod backends;
pub mod config;
pub mod files;
pub mod library;
pub mod media;
pub mod query;
pub mod registry;
pub mod server;
pub mod service;
