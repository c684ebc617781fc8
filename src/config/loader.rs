use super::GlerblConfig;
use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::Path;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository configuration files, lowest priority first
const REPO_CONFIG_FILES: &[&str] = &["glerbl.toml", "glerbl.json", "glerbl.yaml", "glerbl.yml"];

impl GlerblConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// Load configuration, replacing the repository files with `custom_config`
    /// when one is given. Environment variables always win.
    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        tracing::trace!("Loading configuration (custom: {:?})", custom_config);

        let config = Self::figment(custom_config)?
            .extract()
            .context("Failed to parse configuration")?;

        Ok(config)
    }

    /// Build the layered figment without extracting it
    pub fn figment(custom_config: Option<&str>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            let path = Path::new(custom_path);
            if !path.is_file() {
                bail!("Configuration file not found: {}", path.display());
            }
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        } else {
            for &file in REPO_CONFIG_FILES {
                if Path::new(file).is_file() {
                    tracing::debug!("Using repository config {}", file);
                }
                figment = match file {
                    "glerbl.json" => figment.merge(Json::file(file)),
                    "glerbl.toml" => figment.merge(Toml::file(file)),
                    _ => figment.merge(Yaml::file(file)),
                };
            }
        }

        // Environment variables always have highest priority
        Ok(figment.merge(Env::prefixed("GLERBL_").split("__")))
    }
}
