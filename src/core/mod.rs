pub mod config;
pub mod error;

pub use config::GuideConfig;
pub use error::{GuideError, Result};
