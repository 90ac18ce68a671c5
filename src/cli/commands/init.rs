//! Implementation of the `storefront-config init` command.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::PartialConfig;
use crate::infrastructure::config::CONFIG_FILE;
use crate::services::ConfigResolver;

const HEADER: &str = "\
# Storefront configuration.
# Every key is optional; omitted keys keep their defaults.
# Secrets do not belong here: set them through STOREFRONT_* environment
# variables, e.g. STOREFRONT_DB_CONNECTION_OPTIONS__PASSWORD.
";

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub path: PathBuf,
    pub database: String,
    pub overwritten: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut message = format!(
            "Wrote {} defaults to {}",
            self.database,
            self.path.display()
        );
        if self.overwritten {
            message.push_str(" (replaced existing file)");
        }
        message
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Render the resolver's defaults as a commented YAML document.
pub fn render_defaults(resolver: &ConfigResolver) -> Result<String> {
    let partial = PartialConfig::try_from(resolver.defaults())
        .context("Failed to convert defaults into a partial configuration")?;
    let body = serde_yaml::to_string(&partial).context("Failed to render defaults as YAML")?;
    Ok(format!("{HEADER}{body}"))
}

/// Write the defaults into `dir/storefront.yaml`.
///
/// Refuses to replace an existing file unless `force` is set.
pub async fn write_defaults(resolver: &ConfigResolver, dir: &Path, force: bool) -> Result<InitOutput> {
    let path = dir.join(CONFIG_FILE);
    let exists = fs::try_exists(&path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?;
    if exists && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    fs::write(&path, render_defaults(resolver)?)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(InitOutput {
        path,
        database: resolver.defaults().db_connection_options.kind.to_string(),
        overwritten: exists,
    })
}

pub async fn execute(resolver: &ConfigResolver, dir: &Path, force: bool, json: bool) -> Result<()> {
    let result = write_defaults(resolver, dir, force).await?;
    output(&result, json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigLoader;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_written_defaults_resolve_to_defaults() {
        let dir = TempDir::new().unwrap();
        let resolver = ConfigResolver::default();

        let result = write_defaults(&resolver, dir.path(), false).await.unwrap();
        assert!(!result.overwritten);

        let partial = ConfigLoader::load_from_file(&result.path).unwrap();
        assert_eq!(&resolver.resolve(&partial).unwrap(), resolver.defaults());
    }

    #[tokio::test]
    async fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let resolver = ConfigResolver::default();
        write_defaults(&resolver, dir.path(), false).await.unwrap();

        let err = write_defaults(&resolver, dir.path(), false).await.unwrap_err();
        assert!(err.to_string().contains("--force"));

        let forced = write_defaults(&resolver, dir.path(), true).await.unwrap();
        assert!(forced.overwritten);
    }

    #[test]
    fn test_rendered_defaults_have_no_password() {
        let yaml = render_defaults(&ConfigResolver::default()).unwrap();
        assert!(yaml.starts_with("# Storefront configuration."));
        assert!(!yaml.contains("password:"));
    }
}
