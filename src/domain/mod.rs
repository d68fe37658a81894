pub mod model;
pub mod ports;

pub use model::{Classification, Coordinate, Layer, LayerSet, Placement, RawRecord};
pub use ports::{LayerSink, RecordSource};
