use crate::domain::model::{LayerSet, RawRecord};
use crate::utils::error::Result;

/// Supplies the input rows. The core never parses file formats itself.
pub trait RecordSource {
    fn fetch(&self) -> Result<Vec<RawRecord>>;
}

/// Hands the finished layers to an external renderer. Returns a description
/// of where the output went.
pub trait LayerSink {
    fn write(&self, layers: &LayerSet) -> Result<String>;
}
