pub mod defaults;
pub mod loader;
pub mod models;

pub use defaults::DEFAULT_CONTEXT;
pub use loader::ContextLoader;
pub use models::{CultureData, FoodData, KnowledgeContext, LanguageData, OverviewData, TourismData};
