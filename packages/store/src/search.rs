//! Menu search and category filtering.

use crate::models::FoodItem;

/// Pseudo-category that matches every item.
pub const ALL_CATEGORIES: &str = "All";

/// `"All"` followed by each distinct category in first-seen order.
pub fn categories(menu: &[FoodItem]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in menu {
        if !out.iter().any(|c| *c == item.category) {
            out.push(item.category.clone());
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchFilter {
    pub query: String,
    pub category: String,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl SearchFilter {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != ALL_CATEGORIES
    }

    /// Case-insensitive match of the query against name, description or
    /// category, combined with an exact category filter.
    pub fn matches(&self, item: &FoodItem) -> bool {
        let needle = self.query.to_lowercase();
        let matches_query = needle.is_empty()
            || item.name.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
            || item.category.to_lowercase().contains(&needle);
        let matches_category = self.category == ALL_CATEGORIES || item.category == self.category;
        matches_query && matches_category
    }

    pub fn filter(&self, menu: &[FoodItem]) -> Vec<FoodItem> {
        menu.iter().filter(|item| self.matches(item)).cloned().collect()
    }

    pub fn results_heading(&self, count: usize) -> String {
        if self.is_active() {
            format!("Search Results ({count} items found)")
        } else {
            "All Food Items".to_string()
        }
    }

    pub fn empty_message(&self) -> String {
        if self.query.is_empty() {
            "No items available in this category".to_string()
        } else {
            format!("No items match your search for \"{}\"", self.query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str, name: &str, category: &str, description: &str) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: name.to_string(),
            price: 10.0,
            category: category.to_string(),
            image: String::new(),
            description: description.to_string(),
        }
    }

    fn menu() -> Vec<FoodItem> {
        vec![
            food("1", "Paneer Roll", "Rolls", "Grilled paneer wrap"),
            food("2", "Veg Noodles", "Chinese", "Hakka style"),
            food("3", "Cold Coffee", "Beverages", "With ice cream"),
            food("4", "Egg Roll", "Rolls", "Double egg"),
        ]
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        assert_eq!(categories(&menu()), vec!["All", "Rolls", "Chinese", "Beverages"]);
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn default_filter_returns_everything() {
        let filter = SearchFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.filter(&menu()).len(), 4);
        assert_eq!(filter.results_heading(4), "All Food Items");
    }

    #[test]
    fn query_matches_name_description_and_category() {
        let by_name = SearchFilter::new("ROLL", ALL_CATEGORIES).filter(&menu());
        assert_eq!(by_name.len(), 2);

        let by_description = SearchFilter::new("hakka", ALL_CATEGORIES).filter(&menu());
        assert_eq!(by_description[0].id, "2");

        let by_category = SearchFilter::new("bever", ALL_CATEGORIES).filter(&menu());
        assert_eq!(by_category[0].id, "3");
    }

    #[test]
    fn category_and_query_combine() {
        let filter = SearchFilter::new("egg", "Rolls");
        let results = filter.filter(&menu());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Egg Roll");
        assert_eq!(filter.results_heading(results.len()), "Search Results (1 items found)");

        let none = SearchFilter::new("coffee", "Rolls");
        assert!(none.filter(&menu()).is_empty());
        assert_eq!(none.empty_message(), "No items match your search for \"coffee\"");
        assert_eq!(
            SearchFilter::new("", "Desserts").empty_message(),
            "No items available in this category"
        );
    }
}
