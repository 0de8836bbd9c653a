pub mod classifier;
pub mod models;
pub mod patterns;

pub use classifier::QueryClassifier;
pub use models::{Category, Intent};
pub use patterns::{CATEGORY_MARKERS, KNOWN_LOCATIONS, TIME_MARKERS};
