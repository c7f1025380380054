//! Load — layered config: defaults, optional file, then environment.

use std::path::Path;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use super::model::ReportConfig;

pub const ENV_PREFIX: &str = "LOGREPORT";
pub const CONFIG_FILE_ENV: &str = "LOGREPORT_CONFIG_FILE";
const DEFAULT_CONFIG_NAME: &str = "logreport";

impl ReportConfig {
    /// Load configuration.
    /// Priority: Environment Variables > Config File > Defaults
    ///
    /// An explicit `path` must exist. Otherwise `LOGREPORT_CONFIG_FILE`, then
    /// `logreport.{toml,yaml,json,...}` in the working directory, are used
    /// when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let env = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);

        Self::build(path, env)
    }

    fn build(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let defaults = config::Config::try_from(&ReportConfig::default())
            .context("Failed to serialize default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        builder = match path {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                builder.add_source(config::File::from(path).required(true))
            }
            None => match std::env::var(CONFIG_FILE_ENV) {
                Ok(file) => builder.add_source(config::File::with_name(&file).required(false)),
                Err(_) => builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
            },
        };

        builder
            .add_source(env)
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            anyhow::bail!("logging.level must not be empty");
        }
        EnvFilter::try_new(&self.logging.level)
            .with_context(|| format!("Invalid logging.level: {}", self.logging.level))?;
        Ok(())
    }
}
