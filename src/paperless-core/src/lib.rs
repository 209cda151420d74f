//! Paperless Core Library
//!
//! This crate provides the data model shared by the Paperless-ngx client:
//! - Typed records for the ten REST resource kinds
//! - Partial request records for create and update calls
//! - The `Resource` trait mapping each kind to its API path
//! - Client configuration

pub mod config;
pub mod matching;
pub mod models;
pub mod resource;
pub mod users;
pub mod workflow;

// Re-export commonly used types
pub use config::ClientConfig;
pub use matching::MatchingAlgorithm;
pub use models::*;
pub use resource::Resource;
pub use users::{Group, GroupRequest, User, UserRequest};
pub use workflow::*;
