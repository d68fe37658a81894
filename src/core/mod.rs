pub mod distance;
pub mod extract;
pub mod grouping;
pub mod offset;
pub mod pipeline;

pub use distance::DistanceClassifier;
pub use extract::parse_coordinate;
pub use grouping::group_by_entity;
pub use offset::OffsetResolver;
pub use pipeline::PlacementPipeline;
