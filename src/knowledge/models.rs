use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


pub const HERITAGE_AREAS_KEY: &str = "heritage_areas";


/// Read-only knowledge snapshot consumed by the response composer.
///
/// Every section and every field deserializes with a default, so a knowledge
/// file that omits a topic yields an empty section rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeContext {
    pub language: LanguageData,
    pub food: FoodData,
    pub tourism: TourismData,
    pub culture: CultureData,
    pub overview: OverviewData,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageData {
    
    pub greetings: Vec<String>,
    
    pub phrases: BTreeMap<String, String>,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodData {
    pub dishes: Vec<String>,
    pub areas: Vec<String>,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourismData {
    /// Kept in knowledge-file order; lookups return the first matching place.
    pub peak_times: IndexMap<String, String>,
    
    pub transportation: BTreeMap<String, String>,
    pub peak_season: String,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CultureData {
    pub etiquette: Vec<String>,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewData {
    pub description: String,
    pub key_areas: Vec<String>,
}

impl LanguageData {
    
    pub fn meaning_of(&self, phrase: &str) -> Option<&str> {
        self.phrases
            .get(phrase)
            .map(String::as_str)
            .filter(|m| !m.trim().is_empty())
    }
}

impl FoodData {
    
    pub fn area_matching(&self, location: &str) -> Option<&str> {
        let needle = location.to_lowercase();
        self.areas
            .iter()
            .find(|area| area.to_lowercase().contains(&needle))
            .map(String::as_str)
    }
}

impl TourismData {
    /// First peak-time entry, in file order, whose place name contains
    /// `location`, compared case-insensitively.
    pub fn peak_time_for(&self, location: &str) -> Option<(&str, &str)> {
        let needle = location.to_lowercase();
        self.peak_times
            .iter()
            .find(|(place, _)| place.to_lowercase().contains(&needle))
            .map(|(place, window)| (place.as_str(), window.as_str()))
    }

    pub fn heritage_transport(&self) -> Option<&str> {
        self.transportation
            .get(HERITAGE_AREAS_KEY)
            .map(String::as_str)
            .filter(|note| !note.trim().is_empty())
    }

    pub fn season(&self) -> Option<&str> {
        let season = self.peak_season.trim();
        (!season.is_empty()).then_some(season)
    }
}

impl KnowledgeContext {
    
    pub fn topic_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        counts.insert("language", self.language.greetings.len() + self.language.phrases.len());
        counts.insert("food", self.food.dishes.len() + self.food.areas.len());
        counts.insert(
            "tourism",
            self.tourism.peak_times.len()
                + self.tourism.transportation.len()
                + usize::from(self.tourism.season().is_some()),
        );
        counts.insert("culture", self.culture.etiquette.len());
        counts.insert(
            "overview",
            self.overview.key_areas.len() + usize::from(!self.overview.description.is_empty()),
        );
        counts
    }

    pub fn is_empty(&self) -> bool {
        self.topic_counts().values().all(|&count| count == 0)
    }
}
