use crate::domain::model::Coordinate;
use std::collections::HashMap;

/// Positions are considered "the same spot" once rounded to 5 decimal
/// places, about 1.1 m on the ground.
const KEY_SCALE: f64 = 1e5;

/// Spreads markers that land on the same spot so they stay clickable.
///
/// Counters live for one pipeline run only; a fresh resolver is built per
/// invocation, so identical inputs always reproduce identical offsets.
/// Note the angle step wraps: at the default 45° the ninth marker on one
/// spot reuses the first marker's angle and overlaps it again.
#[derive(Debug)]
pub struct OffsetResolver {
    radius_deg: f64,
    angle_step_deg: f64,
    seen: HashMap<(i64, i64), u32>,
}

impl OffsetResolver {
    pub fn new(radius_deg: f64, angle_step_deg: f64) -> Self {
        Self {
            radius_deg,
            angle_step_deg,
            seen: HashMap::new(),
        }
    }

    /// Returns the display coordinate for the next occurrence of this
    /// position: the n-th marker (0-indexed) is pushed out by the offset
    /// radius at n × angle-step.
    pub fn displace(&mut self, coord: Coordinate) -> Coordinate {
        let occurrence = self.seen.entry(rounded_key(coord)).or_insert(0);
        let angle = (*occurrence as f64 * self.angle_step_deg).to_radians();
        *occurrence += 1;

        Coordinate::new(
            coord.lat + self.radius_deg * angle.cos(),
            coord.lon + self.radius_deg * angle.sin(),
        )
    }
}

fn rounded_key(coord: Coordinate) -> (i64, i64) {
    (
        (coord.lat * KEY_SCALE).round() as i64,
        (coord.lon * KEY_SCALE).round() as i64,
    )
}
