//! CLI command implementations.

pub mod defaults;
pub mod init;
pub mod plugins;
pub mod show;
pub mod validate;
