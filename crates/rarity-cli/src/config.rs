//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use rarity_domain::config::DEFAULT_EXCLUDED_TRAIT_TYPES;
use rarity_domain::report::DEFAULT_LINK_TEMPLATE;
use rarity_domain::{LinkTemplate, ReservedTraitTypes, TraitConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Trait handling
    #[serde(default)]
    pub traits: TraitSettings,

    /// Output locations and formatting
    #[serde(default)]
    pub output: OutputSettings,
}

/// Trait handling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitSettings {
    /// Trait types ignored by scoring (exact match)
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,

    /// Trait type marking featured items (exact match)
    #[serde(default = "default_featured")]
    pub featured: String,

    /// Rank metadata trait (case-insensitive)
    #[serde(default = "default_rank")]
    pub rank: String,

    /// Rarity metadata trait (case-insensitive), also the appended label
    #[serde(default = "default_rarity")]
    pub rarity: String,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Item link pattern with an `{id}` placeholder
    #[serde(default = "default_link_template")]
    pub link_template: String,

    /// Directory for rankings and statistics reports
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".rarity").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default path falls back to built-in
    /// defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!("Config file '{}' does not exist", path.display())));
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check the settings for values the pipeline cannot use.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("traits.featured", &self.traits.featured),
            ("traits.rank", &self.traits.rank),
            ("traits.rarity", &self.traits.rarity),
        ] {
            if value.trim().is_empty() {
                return Err(CliError::Config(format!("{} must not be empty", field)));
            }
        }
        self.link_template()?;
        Ok(())
    }

    /// Trait configuration passed to every pipeline stage.
    pub fn trait_config(&self) -> TraitConfig {
        TraitConfig {
            excluded_trait_types: self.traits.excluded.iter().cloned().collect(),
            reserved: ReservedTraitTypes {
                rank: self.traits.rank.clone(),
                rarity: self.traits.rarity.clone(),
                featured: self.traits.featured.clone(),
            },
        }
    }

    /// Parsed item link template.
    pub fn link_template(&self) -> Result<LinkTemplate> {
        Ok(LinkTemplate::new(self.output.link_template.clone())?)
    }
}

impl Default for TraitSettings {
    fn default() -> Self {
        Self {
            excluded: default_excluded(),
            featured: default_featured(),
            rank: default_rank(),
            rarity: default_rarity(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            link_template: default_link_template(),
            reports_dir: default_reports_dir(),
        }
    }
}

fn default_excluded() -> Vec<String> {
    DEFAULT_EXCLUDED_TRAIT_TYPES.iter().map(|s| s.to_string()).collect()
}

fn default_featured() -> String {
    ReservedTraitTypes::default().featured
}

fn default_rank() -> String {
    ReservedTraitTypes::default().rank
}

fn default_rarity() -> String {
    ReservedTraitTypes::default().rarity
}

fn default_link_template() -> String {
    DEFAULT_LINK_TEMPLATE.to_string()
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("rarity")
}
