//! # Studio Core
//!
//! Domain layer of the studio site: entities, form models, the
//! backend-neutral query model, ports and the services built on them.
//! Nothing in here talks to a database or the network directly.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;
pub mod services;

pub use error::{DomainError, RepoError};
