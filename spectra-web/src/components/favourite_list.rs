use dioxus::prelude::*;
use spectra_core::FavouriteItem;

use super::ResultItem;

#[component]
pub fn FavouriteList(
    favourites: Vec<FavouriteItem>,
    on_remove_from_favourites: EventHandler<FavouriteItem>,
) -> Element {
    rsx! {
        div { class: "favourite-list",
            if favourites.is_empty() {
                p { "No favourites yet." }
            } else {
                for item in favourites {
                    ResultItem {
                        key: "{item.id}",
                        item: item.clone(),
                        action_label: "Remove",
                        on_action: on_remove_from_favourites,
                    }
                }
            }
        }
    }
}
