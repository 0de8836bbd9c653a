use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
    EnumString, IntoStaticStr, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Language,
    Food,
    Tourism,
    Culture,
    General,
}

impl Category {
    /// Categories that carry marker tables, in tie-break order.
    pub const SCORED: [Category; 4] = [
        Category::Language,
        Category::Food,
        Category::Tourism,
        Category::Culture,
    ];

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}


/// Classified form of one user query. Built once by the classifier and
/// consumed once by the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub category: Category,
    
    pub keywords: Vec<String>,
    
    pub location: Option<String>,
    
    pub time_context: Option<String>,
}

impl Intent {
    pub fn new(category: Category, keywords: Vec<String>) -> Self {
        Self {
            category,
            keywords,
            location: None,
            time_context: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_time_context(mut self, time_context: impl Into<String>) -> Self {
        self.time_context = Some(time_context.into());
        self
    }

    
    pub fn joined_keywords(&self) -> String {
        self.keywords.join(" ")
    }

    pub fn mentions(&self, marker: &str) -> bool {
        self.keywords.iter().any(|k| k.to_lowercase().contains(marker))
    }
}
