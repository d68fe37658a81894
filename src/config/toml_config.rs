use crate::config::PlacementSettings;
use crate::utils::error::{PlacementError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: Option<PipelineInfo>,
    pub placement: Option<PlacementSection>,
    pub input: InputSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementSection {
    pub near_threshold_m: Option<f64>,
    pub offset_radius_deg: Option<f64>,
    pub offset_angle_step_deg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlacementError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlacementError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlacementError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Missing placement keys fall back to the defaults.
    pub fn settings(&self) -> PlacementSettings {
        let defaults = PlacementSettings::default();
        match &self.placement {
            Some(section) => PlacementSettings {
                near_threshold_m: section.near_threshold_m.unwrap_or(defaults.near_threshold_m),
                offset_radius_deg: section
                    .offset_radius_deg
                    .unwrap_or(defaults.offset_radius_deg),
                offset_angle_step_deg: section
                    .offset_angle_step_deg
                    .unwrap_or(defaults.offset_angle_step_deg),
            },
            None => defaults,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input.path", &self.input.path)?;
        validation::validate_path("output.path", &self.output.path)?;
        if let Some(pipeline) = &self.pipeline {
            validation::validate_non_empty_string("pipeline.name", &pipeline.name)?;
        }
        self.settings().validate()
    }
}
