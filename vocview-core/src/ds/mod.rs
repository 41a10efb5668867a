mod dataset;
mod navigate;

pub use dataset::Dataset;
pub use dataset::Entry;
pub use dataset::pick;

pub use navigate::Navigator;
