use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use super::strategies::{Strategy, strategy_for};
use crate::core::error::{GuideError, Result};
use crate::knowledge::KnowledgeContext;
use crate::query::Intent;


pub struct ResponseComposer;

impl ResponseComposer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Always yields a non-empty, trimmed sentence. Faults inside a strategy
    /// are replaced with the fixed composition fallback.
    pub fn compose(&self, intent: &Intent, context: &KnowledgeContext) -> String {
        Self::or_guidance(self.try_compose(intent, context))
    }

    fn or_guidance(result: Result<String>) -> String {
        match result {
            Ok(response) => response,
            Err(e) => {
                warn!("Response composition failed: {}", e);
                e.user_message().to_string()
            }
        }
    }

    pub fn try_compose(&self, intent: &Intent, context: &KnowledgeContext) -> Result<String> {
        debug!("Composing {} response", intent.category);
        self.compose_with(strategy_for(intent.category), intent, context)
    }

    /// Runs `strategy` with fault recovery and rejects blank output.
    pub fn compose_with(
        &self,
        strategy: Strategy,
        intent: &Intent,
        context: &KnowledgeContext,
    ) -> Result<String> {
        let response = panic::catch_unwind(AssertUnwindSafe(|| strategy(intent, context)))
            .map_err(|payload| GuideError::Composition(panic_message(payload.as_ref())))?;

        let trimmed = response.trim();
        if trimmed.is_empty() {
            return Err(GuideError::EmptyResponse);
        }
        Ok(trimmed.to_string())
    }
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{COMPOSITION_FAILURE_MESSAGE, EMPTY_RESPONSE_MESSAGE};
    use crate::query::{Category, QueryClassifier};
    use crate::response::templates::{GENERAL_RESPONSE, TOURISM_FALLBACK};

    fn answer(query: &str, context: &KnowledgeContext) -> String {
        let intent = QueryClassifier::new().classify(query);
        ResponseComposer::new().compose(&intent, context)
    }

    #[test]
    fn test_khamma_ghani_meaning() {
        let response = answer("What does Khamma Ghani mean?", &KnowledgeContext::udaipur());
        assert!(response.contains("Traditional greeting meaning hello/respect"));
    }

    #[test]
    fn test_surajpole_food() {
        let response = answer("Best food in Surajpole area?", &KnowledgeContext::udaipur());
        assert!(response.contains("Surajpole"));
        assert!(response.contains("Dal Baati Churma"));
    }

    #[test]
    fn test_city_palace_crowds() {
        let response = answer(
            "When to visit City Palace to avoid crowds?",
            &KnowledgeContext::udaipur(),
        );
        assert!(response.contains("4 PM - 9 PM"));
        assert!(response.contains("7-10 AM"));
        assert!(response.contains("after 8 PM"));
    }

    #[test]
    fn test_heritage_transport() {
        let response = answer("Transportation to heritage areas?", &KnowledgeContext::udaipur());
        assert!(response.contains("two-wheelers are the fastest mode inside heritage areas"));
    }

    #[test]
    fn test_general_fallback_sentence() {
        let response = answer("asdkj qwop", &KnowledgeContext::udaipur());
        assert_eq!(response, GENERAL_RESPONSE);
    }

    #[test]
    fn test_missing_peak_times_falls_through() {
        let mut context = KnowledgeContext::udaipur();
        context.tourism.peak_times.clear();

        let intent = QueryClassifier::new().classify("When to visit City Palace to avoid crowds?");
        assert_eq!(intent.location.as_deref(), Some("City Palace"));
        assert_eq!(ResponseComposer::new().compose(&intent, &context), TOURISM_FALLBACK);
    }

    #[test]
    fn test_never_empty_for_any_context() {
        let queries = [
            "What does Khamma Ghani mean?",
            "Local greeting customs?",
            "What is Dal Baati Churma?",
            "Peak season timing for tourists?",
            "Temple etiquette in Udaipur?",
            "Traffic near Lake Pichola in the evening",
            "asdkj qwop",
            "?",
        ];
        for context in [KnowledgeContext::udaipur(), KnowledgeContext::default()] {
            for query in queries {
                let response = answer(query, &context);
                assert!(!response.is_empty(), "empty response for {query}");
                assert_eq!(response, response.trim());
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let context = KnowledgeContext::udaipur();
        let first = answer("Peak season timing for tourists?", &context);
        for _ in 0..5 {
            assert_eq!(answer("Peak season timing for tourists?", &context), first);
        }
    }

    #[test]
    fn test_panic_message_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn std::any::Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    fn failing_strategy(_intent: &Intent, _context: &KnowledgeContext) -> String {
        panic!("strategy fault")
    }

    fn blank_strategy(_intent: &Intent, _context: &KnowledgeContext) -> String {
        "   ".to_string()
    }

    #[test]
    fn test_strategy_panic_is_recovered() {
        let composer = ResponseComposer::new();
        let intent = Intent::new(Category::Food, vec!["food".to_string()]);
        let context = KnowledgeContext::udaipur();

        let result = composer.compose_with(failing_strategy, &intent, &context);
        match result {
            Err(GuideError::Composition(msg)) => assert_eq!(msg, "strategy fault"),
            other => panic!("expected composition error, got {:?}", other),
        }

        let result = composer.compose_with(failing_strategy, &intent, &context);
        assert_eq!(ResponseComposer::or_guidance(result), COMPOSITION_FAILURE_MESSAGE);
    }

    #[test]
    fn test_blank_strategy_output_is_rejected() {
        let composer = ResponseComposer::new();
        let intent = Intent::new(Category::Culture, vec!["temple".to_string()]);
        let context = KnowledgeContext::udaipur();

        let result = composer.compose_with(blank_strategy, &intent, &context);
        assert!(matches!(result, Err(GuideError::EmptyResponse)));

        let result = composer.compose_with(blank_strategy, &intent, &context);
        assert_eq!(ResponseComposer::or_guidance(result), EMPTY_RESPONSE_MESSAGE);
    }

    #[test]
    fn test_compose_with_trims_output() {
        let padded: Strategy = |_, _| "  Khamma Ghani!  ".to_string();
        let intent = Intent::new(Category::Language, vec!["khamma".to_string()]);
        let result = ResponseComposer::new().compose_with(padded, &intent, &KnowledgeContext::default());
        assert_eq!(result.unwrap(), "Khamma Ghani!");
    }

    #[test]
    fn test_composition_error_maps_to_fallback() {
        let err = GuideError::Composition("boom".to_string());
        assert_eq!(err.user_message(), COMPOSITION_FAILURE_MESSAGE);
    }
}
