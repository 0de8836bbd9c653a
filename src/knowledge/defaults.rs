use lazy_static::lazy_static;
use std::collections::BTreeMap;

use super::models::{
    CultureData, FoodData, HERITAGE_AREAS_KEY, KnowledgeContext, LanguageData, OverviewData,
    TourismData,
};


const GREETINGS: &[(&str, &str)] = &[
    ("Khamma Ghani", "Traditional greeting meaning hello/respect"),
    ("Ram Ram sa", "Casual greeting"),
    ("Padharo Mhare Des", "Welcome to our land"),
    ("Bhai sa", "Respectful way to address someone"),
];

const DISHES: &[&str] = &["Dal Baati Churma", "Kachori", "Mirchi Vada", "Ghewar"];

const FOOD_AREAS: &[&str] = &["Surajpole", "Hathipole", "Chetak Circle", "Old City markets"];

const PEAK_TIMES: &[(&str, &str)] = &[
    ("City Palace", "4 PM - 9 PM"),
    ("Lake Pichola", "4 PM - 9 PM"),
];

const HERITAGE_TRANSPORT: &str = "Two-wheelers are the fastest mode inside heritage areas";

const PEAK_SEASON: &str = "October to March";

const ETIQUETTE: &[&str] = &[
    "Modest clothing near temples and palaces",
    "Respect local customs and greetings",
];

const DESCRIPTION: &str = "Udaipur, known as the City of Lakes";

const KEY_AREAS: &[&str] = &["Lake Pichola", "City Palace", "Fateh Sagar", "Sajjangarh"];


fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn owned_map<M: FromIterator<(String, String)>>(pairs: &[(&str, &str)]) -> M {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn build_default_context() -> KnowledgeContext {
    let mut transportation = BTreeMap::new();
    transportation.insert(HERITAGE_AREAS_KEY.to_string(), HERITAGE_TRANSPORT.to_string());

    KnowledgeContext {
        language: LanguageData {
            greetings: GREETINGS.iter().map(|(g, _)| (*g).to_string()).collect(),
            phrases: owned_map(GREETINGS),
        },
        food: FoodData {
            dishes: owned(DISHES),
            areas: owned(FOOD_AREAS),
        },
        tourism: TourismData {
            peak_times: owned_map(PEAK_TIMES),
            transportation,
            peak_season: PEAK_SEASON.to_string(),
        },
        culture: CultureData {
            etiquette: owned(ETIQUETTE),
        },
        overview: OverviewData {
            description: DESCRIPTION.to_string(),
            key_areas: owned(KEY_AREAS),
        },
    }
}

lazy_static! {
    /// Built-in Udaipur knowledge, used whenever no knowledge file is available.
    pub static ref DEFAULT_CONTEXT: KnowledgeContext = build_default_context();
}

impl KnowledgeContext {
    pub fn udaipur() -> Self {
        DEFAULT_CONTEXT.clone()
    }
}
