use serde::{Deserialize, Serialize};

/// One input row, as handed over by the spreadsheet-parsing collaborator.
/// GPS fields are raw "lat lon" text and may be garbage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub entity: String,
    #[serde(default)]
    pub code: Option<String>,
    pub origin_gps: String,
    pub destination_gps: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Near,
    Far,
}

/// A fully resolved record: original coordinates drive the distance, display
/// coordinates carry the small de-overlap offset for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub entity: String,
    pub code: Option<String>,
    pub origin: Coordinate,
    pub origin_display: Coordinate,
    pub destination: Coordinate,
    pub destination_display: Coordinate,
    pub distance_km: f64,
    pub classification: Classification,
}

/// One toggleable group of placements, all belonging to the same entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub entity: String,
    pub placements: Vec<Placement>,
}

/// Pipeline output. Never empty: a run with zero surviving placements fails
/// with `PlacementError::EmptyResultSet` instead of producing this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSet {
    pub layers: Vec<Layer>,
}

impl LayerSet {
    pub fn placement_count(&self) -> usize {
        self.layers.iter().map(|l| l.placements.len()).sum()
    }

    /// Map center: the mean of the original origin coordinates.
    pub fn center(&self) -> Coordinate {
        let mut lat_sum = 0.0;
        let mut lon_sum = 0.0;
        let mut count = 0usize;
        for layer in &self.layers {
            for placement in &layer.placements {
                lat_sum += placement.origin.lat;
                lon_sum += placement.origin.lon;
                count += 1;
            }
        }
        Coordinate::new(lat_sum / count as f64, lon_sum / count as f64)
    }
}
