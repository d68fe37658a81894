pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the placement core, shared by the CLI and file configs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlacementSettings {
    /// Distance at or under which a pair is tagged `near`, in meters.
    pub near_threshold_m: f64,
    /// De-overlap displacement radius, in degrees (~3 m by default).
    pub offset_radius_deg: f64,
    /// Angle between consecutive markers on the same spot, in degrees.
    pub offset_angle_step_deg: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            near_threshold_m: 300.0,
            offset_radius_deg: 0.00003,
            offset_angle_step_deg: 45.0,
        }
    }
}

impl Validate for PlacementSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_positive("near_threshold_m", self.near_threshold_m)?;
        validation::validate_positive("offset_radius_deg", self.offset_radius_deg)?;
        validation::validate_positive("offset_angle_step_deg", self.offset_angle_step_deg)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "placemap")]
#[command(about = "Builds de-overlapped, classified map layers from origin/destination GPS pairs")]
pub struct CliConfig {
    /// CSV file with entity, code, origin_gps and destination_gps columns
    #[arg(long)]
    pub input: String,

    #[arg(long, default_value = "./output/layers.json")]
    pub output: String,

    /// Optional TOML config file; overrides the tuning flags below
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "300.0")]
    pub near_threshold_m: f64,

    #[arg(long, default_value = "0.00003")]
    pub offset_radius_deg: f64,

    #[arg(long, default_value = "45.0")]
    pub offset_angle_step_deg: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn settings(&self) -> PlacementSettings {
        PlacementSettings {
            near_threshold_m: self.near_threshold_m,
            offset_radius_deg: self.offset_radius_deg,
            offset_angle_step_deg: self.offset_angle_step_deg,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output", &self.output)?;
        self.settings().validate()
    }
}
