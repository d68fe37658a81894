use crate::config::PlacementSettings;
use crate::core::distance::DistanceClassifier;
use crate::core::extract::parse_coordinate;
use crate::core::grouping::group_by_entity;
use crate::core::offset::OffsetResolver;
use crate::domain::model::{LayerSet, Placement, RawRecord};
use crate::utils::error::{PlacementError, Result};
use crate::utils::validation::Validate;

/// Runs the full placement pass over a batch of input rows.
///
/// Rows with an unparseable origin or destination are dropped, not errored.
/// Distance and classification always come from the original coordinates;
/// only the display coordinates carry the de-overlap offset.
pub struct PlacementPipeline {
    settings: PlacementSettings,
    classifier: DistanceClassifier,
}

impl PlacementPipeline {
    /// Fails up front on bad tuning values rather than mid-batch.
    pub fn new(settings: PlacementSettings) -> Result<Self> {
        settings.validate()?;
        let classifier = DistanceClassifier::new(settings.near_threshold_m);
        Ok(Self {
            settings,
            classifier,
        })
    }

    /// Processes records strictly in input order. Order matters twice: it
    /// fixes the offset angle of colliding markers and the layer ordering.
    pub fn run(&self, records: Vec<RawRecord>) -> Result<LayerSet> {
        // Origins and destinations get separate occurrence counters so an
        // origin never steals a destination's offset slot. Both counters
        // are scoped to this run.
        let mut origin_offsets = OffsetResolver::new(
            self.settings.offset_radius_deg,
            self.settings.offset_angle_step_deg,
        );
        let mut destination_offsets = OffsetResolver::new(
            self.settings.offset_radius_deg,
            self.settings.offset_angle_step_deg,
        );

        let total = records.len();
        let mut placements = Vec::with_capacity(total);

        for record in records {
            let (Some(origin), Some(destination)) = (
                parse_coordinate(&record.origin_gps),
                parse_coordinate(&record.destination_gps),
            ) else {
                tracing::debug!(
                    "Dropping record for '{}': unparseable GPS text",
                    record.entity
                );
                continue;
            };

            let (distance_km, classification) = self.classifier.classify(origin, destination);

            placements.push(Placement {
                entity: record.entity,
                code: record.code,
                origin,
                origin_display: origin_offsets.displace(origin),
                destination,
                destination_display: destination_offsets.displace(destination),
                distance_km,
                classification,
            });
        }

        if placements.is_empty() {
            return Err(PlacementError::EmptyResultSet);
        }

        tracing::info!(
            "Placed {} of {} records into layers",
            placements.len(),
            total
        );

        Ok(LayerSet {
            layers: group_by_entity(placements),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Classification;
    use approx::assert_relative_eq;

    fn record(entity: &str, origin: &str, destination: &str) -> RawRecord {
        RawRecord {
            entity: entity.to_string(),
            code: None,
            origin_gps: origin.to_string(),
            destination_gps: destination.to_string(),
        }
    }

    fn pipeline() -> PlacementPipeline {
        PlacementPipeline::new(PlacementSettings::default()).unwrap()
    }

    #[test]
    fn test_construction_rejects_bad_settings() {
        let settings = PlacementSettings {
            offset_radius_deg: -1.0,
            ..Default::default()
        };
        assert!(PlacementPipeline::new(settings).is_err());
    }

    #[test]
    fn test_duplicate_origins_get_distinct_display_coordinates() {
        let layers = pipeline()
            .run(vec![
                record("X", "10.0 20.0", "10.0 20.0"),
                record("X", "10.0 20.0", "10.0 20.0"),
            ])
            .unwrap();

        assert_eq!(layers.layers.len(), 1);
        assert_eq!(layers.layers[0].entity, "X");
        let placements = &layers.layers[0].placements;
        assert_eq!(placements.len(), 2);

        for p in placements {
            assert_eq!(p.origin.lat, 10.0);
            assert_eq!(p.origin.lon, 20.0);
            assert_eq!(p.distance_km, 0.0);
            assert_eq!(p.classification, Classification::Near);
        }

        // First marker offset at 0°, second at 45°.
        let radius = PlacementSettings::default().offset_radius_deg;
        assert_relative_eq!(placements[0].origin_display.lat, 10.0 + radius, epsilon = 1e-12);
        assert_relative_eq!(placements[0].origin_display.lon, 20.0, epsilon = 1e-12);
        let angle = 45.0_f64.to_radians();
        assert_relative_eq!(
            placements[1].origin_display.lat,
            10.0 + radius * angle.cos(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            placements[1].origin_display.lon,
            20.0 + radius * angle.sin(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_unparseable_record_is_dropped_silently() {
        let layers = pipeline()
            .run(vec![
                record("X", "abc 20.0", "10.0 20.0"),
                record("Y", "10.0 20.0", "10.1 20.1"),
            ])
            .unwrap();

        assert_eq!(layers.layers.len(), 1);
        assert_eq!(layers.layers[0].entity, "Y");
    }

    #[test]
    fn test_all_invalid_input_is_a_distinct_outcome() {
        let result = pipeline().run(vec![
            record("X", "abc 20.0", "10.0 20.0"),
            record("Y", "10.0", "also bad"),
        ]);
        assert!(matches!(result, Err(PlacementError::EmptyResultSet)));
    }

    #[test]
    fn test_empty_input_is_a_distinct_outcome() {
        let result = pipeline().run(Vec::new());
        assert!(matches!(result, Err(PlacementError::EmptyResultSet)));
    }

    #[test]
    fn test_origin_and_destination_counters_are_independent() {
        // One row whose origin and destination share the same spot: each
        // side is the first occurrence in its own key space, so both get 0°.
        let layers = pipeline()
            .run(vec![record("X", "10.0 20.0", "10.0 20.0")])
            .unwrap();

        let p = &layers.layers[0].placements[0];
        let radius = PlacementSettings::default().offset_radius_deg;
        assert_relative_eq!(p.origin_display.lat, 10.0 + radius, epsilon = 1e-12);
        assert_relative_eq!(p.destination_display.lat, 10.0 + radius, epsilon = 1e-12);
    }

    #[test]
    fn test_classification_uses_original_not_display_coordinates() {
        // Two rows on the same spot: displacement moves the markers apart,
        // but both pairs still classify as near with distance 0.
        let layers = pipeline()
            .run(vec![
                record("X", "10.0 20.0", "10.0 20.0"),
                record("X", "10.0 20.0", "10.0 20.0"),
            ])
            .unwrap();

        for p in &layers.layers[0].placements {
            assert_eq!(p.distance_km, 0.0);
            assert_eq!(p.classification, Classification::Near);
        }
    }

    #[test]
    fn test_far_pair_is_tagged_far() {
        let layers = pipeline()
            .run(vec![record("X", "0.0 0.0", "0.01 0.0")])
            .unwrap();

        let p = &layers.layers[0].placements[0];
        assert_eq!(p.classification, Classification::Far);
        assert!(p.distance_km > 1.0 && p.distance_km < 1.2);
    }

    #[test]
    fn test_center_is_mean_of_origins() {
        let layers = pipeline()
            .run(vec![
                record("X", "10.0 20.0", "10.0 20.0"),
                record("Y", "12.0 22.0", "12.0 22.0"),
            ])
            .unwrap();

        let center = layers.center();
        assert_relative_eq!(center.lat, 11.0, epsilon = 1e-12);
        assert_relative_eq!(center.lon, 21.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reruns_reproduce_identical_offsets() {
        let records = || {
            vec![
                record("X", "10.0 20.0", "11.0 21.0"),
                record("Y", "10.0 20.0", "11.0 21.0"),
                record("X", "10.0 20.0", "11.0 21.0"),
            ]
        };

        let first = pipeline().run(records()).unwrap();
        let second = pipeline().run(records()).unwrap();

        for (a, b) in first.layers.iter().zip(second.layers.iter()) {
            for (pa, pb) in a.placements.iter().zip(b.placements.iter()) {
                assert_eq!(pa.origin_display, pb.origin_display);
                assert_eq!(pa.destination_display, pb.destination_display);
            }
        }
    }
}
