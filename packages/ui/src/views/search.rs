use dioxus::prelude::*;
use store::search::{categories, SearchFilter};
use store::FoodItem;

use crate::icons::FaMagnifyingGlass;
use crate::{use_store, FoodItemCard, Icon};

#[component]
pub fn SearchView() -> Element {
    let store = use_store();
    let mut filter = use_signal(SearchFilter::default);

    // The listing is filtered locally; the backend is only asked while no
    // menu has been loaded.
    let server_results = use_resource(move || async move {
        let query = filter().query.trim().to_string();
        if query.is_empty() || !store.peek().menu.is_empty() {
            return None;
        }
        let client = store.peek().client();
        match client.search_foods(&query).await {
            Ok(items) => Some(items),
            Err(e) => {
                tracing::warn!("Search request failed: {e}");
                None
            }
        }
    });

    let menu = store().menu.clone();
    let current = filter();
    let results: Vec<FoodItem> = if menu.is_empty() {
        let fetched = server_results().flatten().unwrap_or_default();
        current.filter(&fetched)
    } else {
        current.filter(&menu)
    };

    rsx! {
        div { class: "search-page",
            div { class: "search-header",
                h1 { "Search Food" }
                p { "Find your favorite dishes from our menu" }
            }

            form {
                class: "search-form",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                div { class: "search-input-group",
                    Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                    input {
                        r#type: "text",
                        class: "search-input",
                        placeholder: "Search for food items, categories, or descriptions...",
                        value: "{current.query}",
                        oninput: move |evt| filter.write().query = evt.value(),
                    }
                }
                div { class: "category-filter",
                    label { r#for: "category-select", "Filter by Category:" }
                    select {
                        id: "category-select",
                        class: "category-select",
                        value: "{current.category}",
                        onchange: move |evt| filter.write().category = evt.value(),
                        for name in categories(&menu) {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }
            }

            div { class: "search-results",
                div { class: "results-header",
                    h2 { "{current.results_heading(results.len())}" }
                    if !current.query.is_empty() {
                        p { class: "search-query",
                            "Showing results for: "
                            strong { "\"{current.query}\"" }
                        }
                    }
                }

                if results.is_empty() {
                    div { class: "no-results",
                        h3 { "No food items found" }
                        p { "{current.empty_message()}" }
                        button {
                            class: "clear-filters-btn",
                            onclick: move |_| filter.set(SearchFilter::default()),
                            "Clear Filters"
                        }
                    }
                } else {
                    div { class: "food-display-list",
                        for item in results {
                            FoodItemCard { key: "{item.id}", item: item.clone() }
                        }
                    }
                }
            }
        }
    }
}
