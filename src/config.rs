//! Caller-supplied source configuration.
//!
//! Configuration is a plain value handed to the loader — never process-wide
//! state — so independent loader instances (production, tests with mock
//! sources) cannot interfere. Definitions deserialize from TOML:
//!
//! ```toml
//! [[sources]]
//! type = "directory"
//! root = "logs_demo"
//!
//! [[sources]]
//! type = "remote"
//! base_url = "https://raw.example.com/logs_demo"
//! categories = ["Performance", "Memoria"]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::loader::SourceDescriptor;

/// Errors from loading or validating source configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Kind tag for a source definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Directory,
    Remote,
}

/// One configured source, TOML-friendly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDefinition {
    #[serde(rename = "type", default)]
    pub kind: SourceType,

    /// Root of the local log tree; directory sources only.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Base URL serving `<base>/<category>/logs.txt`; remote sources only.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Category list for remote sources. Directory sources discover their
    /// categories from subdirectory names instead.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl SourceDefinition {
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self {
            kind: SourceType::Directory,
            root: Some(root.into()),
            ..Self::default()
        }
    }

    pub fn remote(base_url: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            kind: SourceType::Remote,
            base_url: Some(base_url.into()),
            categories,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kind {
            SourceType::Directory => {
                if self.root.is_none() {
                    return Err(ConfigError::Validation(
                        "directory sources require a root".into(),
                    ));
                }
            }
            SourceType::Remote => {
                if self.base_url.is_none() {
                    return Err(ConfigError::Validation(
                        "remote sources require a base_url".into(),
                    ));
                }
                if self.categories.is_empty() {
                    return Err(ConfigError::Validation(
                        "remote sources require at least one category".into(),
                    ));
                }
                let mut seen = HashSet::new();
                for category in &self.categories {
                    if category.is_empty() || category.contains('/') {
                        return Err(ConfigError::Validation(format!(
                            "invalid category name `{category}`"
                        )));
                    }
                    if !seen.insert(category) {
                        return Err(ConfigError::Validation(format!(
                            "duplicate category `{category}`"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Convert to the loader's descriptor. Validates first, so a descriptor
    /// always carries the fields its kind needs.
    pub fn to_descriptor(&self) -> Result<SourceDescriptor, ConfigError> {
        self.validate()?;
        match self.kind {
            SourceType::Directory => {
                let root = self.root.clone().ok_or_else(|| {
                    ConfigError::Validation("directory sources require a root".into())
                })?;
                Ok(SourceDescriptor::Directory { root })
            }
            SourceType::Remote => {
                let base_url = self.base_url.clone().ok_or_else(|| {
                    ConfigError::Validation("remote sources require a base_url".into())
                })?;
                Ok(SourceDescriptor::Remote {
                    base_url,
                    categories: self.categories.clone(),
                })
            }
        }
    }
}

/// Root configuration: the full set of sources for one loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub sources: Vec<SourceDefinition>,
}

impl MonitorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for source in &self.sources {
            source.validate()?;
        }
        Ok(())
    }

    /// Descriptors for every configured source, ready for the loader.
    pub fn descriptors(&self) -> Result<Vec<SourceDescriptor>, ConfigError> {
        self.sources
            .iter()
            .map(SourceDefinition::to_descriptor)
            .collect()
    }
}

/// The fixed category list of the original deployment, as a convenience
/// default for remote sources.
pub fn default_categories() -> Vec<String> {
    [
        "Performance",
        "Memoria",
        "Erro_de_Sincronizacao",
        "Acesso_a_Plano_de_Venda",
        "Autenticacao",
        "Erro_de_Sistema",
        "Logs_de_API",
        "Logs_de_Banco_de_Dados",
        "Logs_de_Transacoes_Financeiras",
        "Atividades_Suspeitas",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
