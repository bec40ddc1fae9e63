use crate::frost::{Frost, KnowledgeBase, KnowledgeEntry};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 4;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Optional YAML settings. Every field has a default, so an absent file
/// and a file with only some keys both work.
///
/// ```yaml
/// min_password_length: 6
/// welcome_banner: false
/// knowledge_base:
///   - topic: nursing
///     advice: Take Biology and Chemistry at Level 3.
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradusConfig {
    pub min_password_length: usize,
    pub welcome_banner: bool,
    /// Replaces the built-in Frost topics when present. Order is match order.
    pub knowledge_base: Option<Vec<KnowledgeEntry>>,
}

impl Default for GradusConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            welcome_banner: true,
            knowledge_base: None,
        }
    }
}

impl GradusConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: GradusConfig = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: GradusConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_password_length == 0 {
            return Err(ConfigError::Invalid(
                "min_password_length must be at least 1".to_string(),
            ));
        }
        if let Some(entries) = &self.knowledge_base {
            // An empty topic is a substring of every question.
            if let Some(pos) = entries.iter().position(|e| e.topic.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "knowledge_base entry {} has an empty topic",
                    pos + 1
                )));
            }
        }
        Ok(())
    }

    pub fn build_frost(&self) -> Frost {
        match &self.knowledge_base {
            Some(entries) => Frost::with_knowledge_base(KnowledgeBase::from_entries(entries.clone())),
            None => Frost::new(),
        }
    }
}
