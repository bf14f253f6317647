mod merge;
mod metrics;
mod model;

pub use merge::merge_asof;
pub use model::AlignedRecord;
