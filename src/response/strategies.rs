use tracing::debug;

use super::templates::*;
use crate::knowledge::KnowledgeContext;
use crate::query::patterns::{GREETING_MARKER, SEASON_MARKERS, TRANSPORT_MARKERS};
use crate::query::{Category, Intent};


pub type Strategy = fn(&Intent, &KnowledgeContext) -> String;


pub fn strategy_for(category: Category) -> Strategy {
    match category {
        Category::Language => language,
        Category::Food => food,
        Category::Tourism => tourism,
        Category::Culture => culture,
        Category::General => general,
    }
}


pub fn language(intent: &Intent, context: &KnowledgeContext) -> String {
    let language = &context.language;

    if intent.mentions(GREETING_MARKER) {
        let meaning = language
            .meaning_of(KHAMMA_GHANI)
            .unwrap_or(KHAMMA_GHANI_FALLBACK_MEANING);
        return format!(
            "'{KHAMMA_GHANI}' is a {meaning}. It's pronounced 'KHAM-ma GHA-ni' and is the most respectful way to greet someone in Udaipur. You can use it any time of day, and locals will appreciate your effort to use their traditional greeting."
        );
    }

    if !language.greetings.is_empty() {
        return format!(
            "Common local greetings in Udaipur include: {}. 'Khamma Ghani' is the most traditional and respectful greeting, while 'Ram Ram sa' is more casual. These greetings show respect for local culture.",
            language.greetings.join(", ")
        );
    }

    LANGUAGE_FALLBACK.to_string()
}


pub fn food(intent: &Intent, context: &KnowledgeContext) -> String {
    let food = &context.food;

    if let Some(location) = intent.location.as_deref() {
        if food.area_matching(location).is_some() {
            return format!(
                "For authentic food in {location}, you'll find excellent local specialties. {FOOD_LOCATION_DISHES} {location} is known for its street food and traditional eateries."
            );
        }
    }

    if !food.dishes.is_empty() {
        return format!(
            "Must-try authentic Udaipur dishes include: {}. Dal Baati Churma is the signature dish - lentils with baked wheat balls and sweet crumble. Visit areas like Surajpole and Hathipole for the best street food experience.",
            food.dishes.join(", ")
        );
    }

    FOOD_FALLBACK.to_string()
}


/// Branches are tried in fixed priority: location crowd timing, then
/// transport, then season, then the generic advice.
pub fn tourism(intent: &Intent, context: &KnowledgeContext) -> String {
    let tourism = &context.tourism;

    if let Some(location) = intent.location.as_deref() {
        if let Some((_, window)) = tourism.peak_time_for(location) {
            debug!("Tourism branch: crowd timing for {}", location);
            return format!(
                "At {location}, expect heavy crowds during {window}. {OFF_PEAK_ADVICE}"
            );
        }
    }

    let joined = intent.joined_keywords();

    if TRANSPORT_MARKERS.iter().any(|m| joined.contains(m)) {
        if let Some(note) = tourism.heritage_transport() {
            debug!("Tourism branch: transportation");
            return format!(
                "For getting around heritage areas, {}. {TRANSPORT_ADVICE}",
                note.to_lowercase()
            );
        }
    }

    if SEASON_MARKERS.iter().any(|m| joined.contains(m)) {
        if let Some(season) = tourism.season() {
            debug!("Tourism branch: peak season");
            return format!(
                "Peak tourist season in Udaipur is {season}. During {season}: {SEASON_ADVICE}"
            );
        }
    }

    TOURISM_FALLBACK.to_string()
}


pub fn culture(_intent: &Intent, context: &KnowledgeContext) -> String {
    let etiquette = &context.culture.etiquette;

    if !etiquette.is_empty() {
        return format!(
            "Cultural etiquette in Udaipur: {}. {CULTURE_CLOSING}",
            etiquette.join(". ")
        );
    }

    CULTURE_FALLBACK.to_string()
}


pub fn general(_intent: &Intent, _context: &KnowledgeContext) -> String {
    GENERAL_RESPONSE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn tourism_intent(words: &[&str]) -> Intent {
        Intent::new(Category::Tourism, keywords(words))
    }

    #[test]
    fn test_language_khamma_uses_phrase_meaning() {
        let context = KnowledgeContext::udaipur();
        let intent = Intent::new(Category::Language, keywords(&["what", "is", "khamma"]));
        let response = language(&intent, &context);
        assert!(response.starts_with("'Khamma Ghani' is a Traditional greeting meaning hello/respect."));
    }

    #[test]
    fn test_language_khamma_without_phrase_uses_generic_meaning() {
        let context = KnowledgeContext::default();
        let intent = Intent::new(Category::Language, keywords(&["khamma?"]));
        let response = language(&intent, &context);
        assert!(response.contains(KHAMMA_GHANI_FALLBACK_MEANING));
    }

    #[test]
    fn test_language_lists_greetings_in_order() {
        let context = KnowledgeContext::udaipur();
        let intent = Intent::new(Category::Language, keywords(&["local", "greeting"]));
        let response = language(&intent, &context);
        assert!(response.contains("Khamma Ghani, Ram Ram sa, Padharo Mhare Des, Bhai sa"));
    }

    #[test]
    fn test_language_fallback() {
        let intent = Intent::new(Category::Language, keywords(&["language"]));
        assert_eq!(language(&intent, &KnowledgeContext::default()), LANGUAGE_FALLBACK);
    }

    #[test]
    fn test_food_location_template() {
        let context = KnowledgeContext::udaipur();
        let intent = Intent::new(Category::Food, keywords(&["food"])).with_location("Hathipole");
        let response = food(&intent, &context);
        assert!(response.starts_with("For authentic food in Hathipole"));
        assert!(response.contains("Kachori"));
    }

    #[test]
    fn test_food_unknown_area_lists_dishes() {
        let context = KnowledgeContext::udaipur();
        let intent = Intent::new(Category::Food, keywords(&["food"])).with_location("Sajjangarh");
        let response = food(&intent, &context);
        assert!(response.contains("Dal Baati Churma, Kachori, Mirchi Vada, Ghewar"));
    }

    #[test]
    fn test_food_fallback() {
        let intent = Intent::new(Category::Food, keywords(&["food"])).with_location("Surajpole");
        assert_eq!(food(&intent, &KnowledgeContext::default()), FOOD_FALLBACK);
    }

    #[test]
    fn test_tourism_location_beats_transport() {
        let context = KnowledgeContext::udaipur();
        let intent = tourism_intent(&["transport", "vehicle"]).with_location("City Palace");
        let response = tourism(&intent, &context);
        assert!(response.starts_with("At City Palace, expect heavy crowds during 4 PM - 9 PM."));
        assert!(response.contains("7-10 AM"));
        assert!(response.contains("after 8 PM"));
    }

    #[test]
    fn test_tourism_transport_lowercases_note() {
        let context = KnowledgeContext::udaipur();
        let response = tourism(&tourism_intent(&["traffic", "bike", "car"]), &context);
        assert!(response.starts_with(
            "For getting around heritage areas, two-wheelers are the fastest mode inside heritage areas."
        ));
    }

    #[test]
    fn test_tourism_transport_beats_season() {
        let context = KnowledgeContext::udaipur();
        let response = tourism(&tourism_intent(&["bike", "in", "october"]), &context);
        assert!(response.starts_with("For getting around heritage areas"));
    }

    #[test]
    fn test_tourism_season() {
        let context = KnowledgeContext::udaipur();
        let response = tourism(&tourism_intent(&["seasonal", "march", "weather"]), &context);
        assert!(response.starts_with("Peak tourist season in Udaipur is October to March."));
        assert!(response.ends_with(SEASON_ADVICE));
    }

    #[test]
    fn test_tourism_unmatched_location_falls_through() {
        let context = KnowledgeContext::udaipur();
        let intent = tourism_intent(&["when", "optimal"]).with_location("Fateh Sagar");
        assert_eq!(tourism(&intent, &context), TOURISM_FALLBACK);
    }

    #[test]
    fn test_tourism_missing_data_falls_through() {
        let context = KnowledgeContext::default();
        let intent = tourism_intent(&["transport", "season"]).with_location("City Palace");
        assert_eq!(tourism(&intent, &context), TOURISM_FALLBACK);
    }

    #[test]
    fn test_tourism_uses_first_listed_peak_time() {
        let context: KnowledgeContext = serde_json::from_str(
            r#"{"tourism":{"peak_times":{"Lake Pichola Boat Jetty":"10 AM - 1 PM","Lake Pichola":"4 PM - 9 PM"}}}"#,
        )
        .unwrap();
        let intent = tourism_intent(&["crowd"]).with_location("Lake Pichola");
        let response = tourism(&intent, &context);
        assert!(response.contains("during 10 AM - 1 PM"));
    }

    #[test]
    fn test_culture_joins_etiquette() {
        let context = KnowledgeContext::udaipur();
        let intent = Intent::new(Category::Culture, keywords(&["temple"]));
        let response = culture(&intent, &context);
        assert!(response.starts_with(
            "Cultural etiquette in Udaipur: Modest clothing near temples and palaces. Respect local customs and greetings."
        ));
        assert!(response.ends_with(CULTURE_CLOSING));
    }

    #[test]
    fn test_culture_fallback() {
        let intent = Intent::new(Category::Culture, keywords(&["custom"]));
        assert_eq!(culture(&intent, &KnowledgeContext::default()), CULTURE_FALLBACK);
    }

    #[test]
    fn test_general_ignores_context() {
        let intent = Intent::new(Category::General, keywords(&["asdkj"]));
        assert_eq!(general(&intent, &KnowledgeContext::udaipur()), GENERAL_RESPONSE);
        assert_eq!(general(&intent, &KnowledgeContext::default()), GENERAL_RESPONSE);
    }
}
