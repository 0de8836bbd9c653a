use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::models::KnowledgeContext;
use crate::core::error::{GuideError, Result};


pub struct ContextLoader {
    path: PathBuf,
}

impl ContextLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the knowledge file. Missing files and malformed JSON
    /// are reported as errors; use [`ContextLoader::load_or_default`] to fall
    /// back to the built-in context instead.
    pub fn load(&self) -> Result<KnowledgeContext> {
        if !self.path.exists() {
            return Err(GuideError::KnowledgeBase(format!(
                "knowledge file not found: {}",
                self.path.display()
            )));
        }

        debug!("Reading knowledge file: {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        let context = Self::parse(&content)?;

        info!(
            "Loaded knowledge from {} ({:?})",
            self.path.display(),
            context.topic_counts()
        );
        Ok(context)
    }

    pub fn parse(content: &str) -> Result<KnowledgeContext> {
        if content.trim().is_empty() {
            return Err(GuideError::KnowledgeBase("knowledge file is empty".to_string()));
        }
        let context: KnowledgeContext = serde_json::from_str(content)?;
        Ok(context)
    }

    pub fn load_or_default(&self) -> KnowledgeContext {
        match self.load() {
            Ok(context) => context,
            Err(e) => {
                warn!("Using built-in knowledge: {}", e);
                KnowledgeContext::udaipur()
            }
        }
    }
}
