use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

use crate::core::config::GuideConfig;
use crate::core::error::{GuideError, Result};
use crate::knowledge::{ContextLoader, KnowledgeContext};
use crate::query::{Intent, QueryClassifier};
use crate::response::ResponseComposer;
use crate::response::composer::panic_message;
use crate::utils::safe_truncate;


pub const EXAMPLE_QUERIES: &[&str] = &[
    "What does Khamma Ghani mean?",
    "Best food in Surajpole area?",
    "When to visit City Palace to avoid crowds?",
    "What is Dal Baati Churma?",
    "Transportation to heritage areas?",
    "Temple etiquette in Udaipur?",
    "Peak season timing for tourists?",
    "Local greeting customs?",
];


pub const TOPICS: &[(&str, &str)] = &[
    ("language", "Local phrases and greetings (like 'Khamma Ghani')"),
    ("food", "Authentic food recommendations and locations"),
    ("tourism", "Tourist crowd timing and transportation advice"),
    ("culture", "Cultural etiquette for temples and palaces"),
];


/// Closing lines printed when an interactive session ends, however it ends.
pub fn farewell_lines(city: &str) -> [String; 2] {
    [
        format!("🙏 Thank you for using the {} Local Guide!", city),
        "Khamma Ghani! (Traditional farewell)".to_string(),
    ]
}


#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub query: String,
    pub intent: Intent,
    pub response: String,
}


/// Single entry point for both front ends: validates the query, classifies
/// it, and composes the reply against the knowledge snapshot it owns.
pub struct LocalGuide {
    classifier: QueryClassifier,
    composer: ResponseComposer,
    context: KnowledgeContext,
}

impl LocalGuide {
    pub fn new(context: KnowledgeContext) -> Self {
        Self {
            classifier: QueryClassifier::new(),
            composer: ResponseComposer::new(),
            context,
        }
    }

    pub fn from_config(config: &GuideConfig) -> Self {
        let context = ContextLoader::new(&config.knowledge_path).load_or_default();
        info!("Local guide ready for {} ({:?})", config.city_name, context.topic_counts());
        Self::new(context)
    }

    pub fn context(&self) -> &KnowledgeContext {
        &self.context
    }

    pub fn classify(&self, query: &str) -> Result<Intent> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GuideError::EmptyQuery);
        }

        Self::classify_with(query, |q| self.classifier.classify(q))
    }

    fn classify_with(query: &str, classify: impl FnOnce(&str) -> Intent) -> Result<Intent> {
        panic::catch_unwind(AssertUnwindSafe(|| classify(query)))
            .map_err(|payload| GuideError::Classification(panic_message(payload.as_ref())))
    }

    pub fn try_answer(&self, query: &str) -> Result<Answer> {
        let intent = self.classify(query)?;
        let response = self.composer.try_compose(&intent, &self.context)?;

        debug!(
            "Answered '{}' with {} response ({} chars)",
            safe_truncate(query.trim(), 50),
            intent.category,
            response.len()
        );

        Ok(Answer {
            query: query.trim().to_string(),
            intent,
            response,
        })
    }

    /// Never fails: every error is replaced by its guidance sentence.
    pub fn answer(&self, query: &str) -> String {
        match self.try_answer(query) {
            Ok(answer) => answer.response,
            Err(e) => {
                if !matches!(e, GuideError::EmptyQuery) {
                    warn!("Query '{}' not answered: {}", safe_truncate(query, 50), e);
                }
                e.user_message().to_string()
            }
        }
    }
}

impl Default for LocalGuide {
    fn default() -> Self {
        Self::new(KnowledgeContext::udaipur())
    }
}
