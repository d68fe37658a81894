pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvSource, JsonSink};
pub use config::{CliConfig, PlacementSettings};
pub use crate::core::pipeline::PlacementPipeline;
pub use domain::{Classification, Coordinate, Layer, LayerSet, Placement, RawRecord};
pub use utils::error::{PlacementError, Result};
