

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::{GuideError, Result};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    
    pub knowledge_path: PathBuf,
    pub city_name: String,

    
    pub server_name: String,
    pub server_version: String,
}

impl GuideConfig {
    
    pub fn new(knowledge_path: impl Into<PathBuf>) -> Self {
        Self {
            knowledge_path: knowledge_path.into(),
            city_name: crate::DEFAULT_CITY.to_string(),
            server_name: "udaipur-guide".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("GUIDE_KNOWLEDGE_PATH")
                .unwrap_or_else(|_| crate::DEFAULT_KNOWLEDGE_PATH.to_string()),
        );

        if let Ok(city) = std::env::var("GUIDE_CITY") {
            config.city_name = city;
        }
        if let Ok(name) = std::env::var("GUIDE_SERVER_NAME") {
            config.server_name = name;
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.knowledge_path.as_os_str().is_empty() {
            return Err(GuideError::Config("knowledge_path must not be empty".to_string()));
        }
        if self.city_name.trim().is_empty() {
            return Err(GuideError::Config("city_name must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self::new(crate::DEFAULT_KNOWLEDGE_PATH)
    }
}
