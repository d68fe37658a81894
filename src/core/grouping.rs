use crate::domain::model::{Layer, Placement};
use std::collections::HashMap;

/// Groups placements into one layer per entity. Layer order follows the
/// first appearance of each entity in the input; records keep their
/// relative input order inside a layer.
pub fn group_by_entity(placements: Vec<Placement>) -> Vec<Layer> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut layers: Vec<Layer> = Vec::new();

    for placement in placements {
        match index.get(&placement.entity) {
            Some(&slot) => layers[slot].placements.push(placement),
            None => {
                index.insert(placement.entity.clone(), layers.len());
                layers.push(Layer {
                    entity: placement.entity.clone(),
                    placements: vec![placement],
                });
            }
        }
    }

    layers
}
