//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::ConfigDomain;

#[derive(Parser, Debug)]
#[command(name = "storefront-config")]
#[command(about = "Resolve and inspect storefront runtime configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file to read instead of ./storefront.yaml
    #[arg(short, long, global = true, env = "STOREFRONT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Layer the development settings below the config files
    #[arg(long, global = true)]
    pub dev: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration, secrets redacted
    Show {
        /// Only show one domain (api, auth, db, plugins, ...)
        #[arg(short, long)]
        domain: Option<ConfigDomain>,
    },

    /// Resolve the configuration and report whether it is valid
    Validate,

    /// Show the defaults for the database selected by `DB`
    Defaults,

    /// Write the defaults to storefront.yaml as a starting point
    Init {
        /// Overwrite an existing storefront.yaml
        #[arg(short, long)]
        force: bool,

        /// Target directory (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List plugins in activation order
    Plugins,
}
