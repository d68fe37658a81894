use crate::domain::model::{Classification, Coordinate};
use geo::{GeodesicDistance, Point};

/// Computes the real-world separation of an origin/destination pair and tags
/// it against the configured threshold.
#[derive(Debug, Clone)]
pub struct DistanceClassifier {
    near_threshold_m: f64,
}

impl DistanceClassifier {
    pub fn new(near_threshold_m: f64) -> Self {
        Self { near_threshold_m }
    }

    /// Geodesic distance on the WGS84 ellipsoid. Inputs are degrees, so a
    /// flat-plane formula would be wrong away from the equator.
    pub fn classify(&self, origin: Coordinate, destination: Coordinate) -> (f64, Classification) {
        let from = Point::new(origin.lon, origin.lat);
        let to = Point::new(destination.lon, destination.lat);
        let meters = from.geodesic_distance(&to);

        let classification = if meters <= self.near_threshold_m {
            Classification::Near
        } else {
            Classification::Far
        };

        (meters / 1000.0, classification)
    }
}
