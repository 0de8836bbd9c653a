//! Marker tables driving classification and tourism branch selection.
//!
//! All matching against these tables is lowercase substring matching, so a
//! marker may hit inside a longer word ("transport" in "transportation").

use super::models::Category;


pub const CATEGORY_MARKERS: &[(Category, &[&str])] = &[
    (Category::Language, &[
        "khamma", "ghani", "greeting", "phrase", "hindi", "mewari", "language", "speak", "say",
    ]),
    (Category::Food, &[
        "food", "eat", "dish", "restaurant", "dal", "baati", "churma", "kachori", "mirchi", "vada",
    ]),
    (Category::Tourism, &[
        "visit", "tourist", "crowd", "timing", "palace", "lake", "transport", "traffic", "season",
    ]),
    (Category::Culture, &[
        "culture", "etiquette", "temple", "custom", "tradition", "respect", "dress", "behavior",
    ]),
];


pub const KNOWN_LOCATIONS: &[&str] = &[
    "surajpole", "hathipole", "city palace", "lake pichola",
    "fateh sagar", "sajjangarh", "chetak circle",
];


pub const TIME_MARKERS: &[&str] = &[
    "morning", "evening", "afternoon", "night", "peak", "busy", "crowd",
];


pub const TRANSPORT_MARKERS: &[&str] = &["transport", "traffic", "vehicle", "bike", "car"];

pub const SEASON_MARKERS: &[&str] = &["season", "weather", "october", "march"];


pub const GREETING_MARKER: &str = "khamma";


pub fn markers_for(category: Category) -> &'static [&'static str] {
    CATEGORY_MARKERS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, markers)| *markers)
        .unwrap_or(&[])
}


pub fn count_markers(text: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|m| text.contains(*m)).count()
}


pub fn first_marker<'a>(text: &str, markers: &[&'a str]) -> Option<&'a str> {
    markers.iter().copied().find(|m| text.contains(m))
}
