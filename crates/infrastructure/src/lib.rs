//! Itemdesk Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus client configuration.

pub mod adapters;
pub mod config;

pub use adapters::{RESOURCE_PATH, ReqwestItemClient, SystemClock};
pub use config::{API_URL_ENV, ClientConfig, ConfigError, DEFAULT_API_URL};
