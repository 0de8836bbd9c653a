use tracing::debug;

use super::models::{Category, Intent};
use super::patterns::{CATEGORY_MARKERS, KNOWN_LOCATIONS, TIME_MARKERS, count_markers, first_marker};
use crate::utils::{safe_truncate, title_case};


/// Keyword classifier turning raw query text into an [`Intent`].
///
/// Stateless: the marker tables are borrowed statics, so one classifier can be
/// shared freely between threads.
pub struct QueryClassifier {
    category_markers: &'static [(Category, &'static [&'static str])],
    locations: &'static [&'static str],
    time_markers: &'static [&'static str],
}

impl QueryClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            category_markers: CATEGORY_MARKERS,
            locations: KNOWN_LOCATIONS,
            time_markers: TIME_MARKERS,
        }
    }

    /// Callers are expected to pass a trimmed, non-empty query.
    pub fn classify(&self, query: &str) -> Intent {
        let query_lower = query.to_lowercase();

        let keywords: Vec<String> = query_lower.split_whitespace().map(str::to_string).collect();
        let category = self.determine_category(&query_lower);
        let location = self.extract_location(&query_lower);
        let time_context = self.extract_time_context(&query_lower);

        debug!(
            "Classified '{}' as {} (location={:?}, time={:?})",
            safe_truncate(query, 50),
            category,
            location,
            time_context
        );

        Intent {
            category,
            keywords,
            location,
            time_context,
        }
    }

    
    pub fn scores(&self, query_lower: &str) -> Vec<(Category, usize)> {
        self.category_markers
            .iter()
            .map(|(category, markers)| (*category, count_markers(query_lower, markers)))
            .collect()
    }

    fn determine_category(&self, query_lower: &str) -> Category {
        let mut best = Category::General;
        let mut best_score = 0;

        // strict comparison keeps the earliest category on ties
        for (category, score) in self.scores(query_lower) {
            if score > best_score {
                best = category;
                best_score = score;
            }
        }

        best
    }

    fn extract_location(&self, query_lower: &str) -> Option<String> {
        first_marker(query_lower, self.locations).map(title_case)
    }

    fn extract_time_context(&self, query_lower: &str) -> Option<String> {
        first_marker(query_lower, self.time_markers).map(str::to_string)
    }
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new()
    }
}
