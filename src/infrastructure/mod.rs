//! Infrastructure layer module
//!
//! This module contains the adapters around the configuration core:
//! - Layered configuration loading (files, environment, development settings)
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
