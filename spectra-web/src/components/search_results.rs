use dioxus::prelude::*;
use spectra_core::SearchResultItem;

use super::ResultItem;

#[component]
pub fn SearchResults(
    results: Vec<SearchResultItem>,
    on_add_to_favourites: EventHandler<SearchResultItem>,
) -> Element {
    if results.is_empty() {
        return rsx! {
            p { "No results found. Try a different search!" }
        };
    }

    rsx! {
        div { class: "search-results",
            for item in results {
                ResultItem {
                    key: "{item.id}",
                    item: item.clone(),
                    action_label: "Add to Favourites",
                    on_action: on_add_to_favourites,
                }
            }
        }
    }
}
