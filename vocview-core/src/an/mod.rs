mod annotation;
mod voc;

pub use annotation::VocAnnotation;
pub use annotation::VocBox;
pub use annotation::fit_ratio;
