

use thiserror::Error;


pub const INVALID_INPUT_MESSAGE: &str = "Please enter a question about local culture, food recommendations, language phrases, or tourist information.";

pub const CLASSIFICATION_FAILURE_MESSAGE: &str = "I had trouble understanding your question. Could you please rephrase it? I can help with local phrases, food recommendations, tourist information, or cultural guidance.";

pub const COMPOSITION_FAILURE_MESSAGE: &str = "I encountered an issue generating a response. Please try rephrasing your question or ask about local language, food, tourism, or cultural topics.";

pub const EMPTY_RESPONSE_MESSAGE: &str = "I'm not sure how to help with that specific question. Try asking about local greetings like 'Khamma Ghani', food recommendations for specific areas, crowd timing at tourist spots, or cultural etiquette guidance.";

pub const KNOWLEDGE_BASE_MESSAGE: &str = "I'm sorry, I can't access the local knowledge base right now. Please try again.";

pub const TECHNICAL_DIFFICULTY_MESSAGE: &str = "I'm experiencing technical difficulties. Please try asking about: local phrases and greetings, authentic food recommendations, tourist crowd timing, or cultural etiquette guidance.";


#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Empty query")]
    EmptyQuery,

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Composition error: {0}")]
    Composition(String),

    #[error("Composed response was empty")]
    EmptyResponse,

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GuideError {
    /// Guidance text shown to the user in place of this error. Never carries
    /// technical detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyQuery => INVALID_INPUT_MESSAGE,
            Self::Classification(_) => CLASSIFICATION_FAILURE_MESSAGE,
            Self::Composition(_) => COMPOSITION_FAILURE_MESSAGE,
            Self::EmptyResponse => EMPTY_RESPONSE_MESSAGE,
            Self::KnowledgeBase(_) | Self::Io(_) | Self::Json(_) => KNOWLEDGE_BASE_MESSAGE,
            Self::Config(_) => TECHNICAL_DIFFICULTY_MESSAGE,
        }
    }
}


pub type Result<T> = std::result::Result<T, GuideError>;
