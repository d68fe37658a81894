use crate::domain::model::{Coordinate, Layer, LayerSet};
use crate::domain::ports::LayerSink;
use crate::utils::error::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Writes the layer set as a JSON document for the external renderer:
/// the map center plus one entry per layer.
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
}

#[derive(Serialize)]
struct MapDocument<'a> {
    center: Coordinate,
    layers: &'a [Layer],
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LayerSink for JsonSink {
    fn write(&self, layers: &LayerSet) -> Result<String> {
        let document = MapDocument {
            center: layers.center(),
            layers: &layers.layers,
        };
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)?;

        tracing::debug!(
            "Wrote {} layers to {}",
            layers.layers.len(),
            self.path.display()
        );
        Ok(self.path.display().to_string())
    }
}
