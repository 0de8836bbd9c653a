pub mod core;
pub mod guide;
pub mod knowledge;
pub mod mcp;
pub mod query;
pub mod response;
pub mod utils;

pub use utils::{install_quiet_panic_hook, safe_truncate, title_case};


pub use crate::core::config::GuideConfig;
pub use crate::core::error::{GuideError, Result};
pub use guide::{Answer, EXAMPLE_QUERIES, LocalGuide};
pub use knowledge::{ContextLoader, KnowledgeContext};
pub use query::{Category, Intent, QueryClassifier};
pub use response::ResponseComposer;


pub const DEFAULT_KNOWLEDGE_PATH: &str = "data/product.json";


pub const DEFAULT_CITY: &str = "Udaipur";
