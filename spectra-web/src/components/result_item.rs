//! Single search hit or favourite - pure view with one action button

use dioxus::prelude::*;
use spectra_core::date;
use spectra_core::SearchResultItem;

/// "Released:" text, or nothing when the item carries no date.
fn released_label(release_date: &str) -> Option<String> {
    if release_date.is_empty() {
        None
    } else {
        Some(date::format_long(Some(release_date)))
    }
}

fn kind_label(kind: &str) -> &str {
    if kind.is_empty() {
        date::NOT_AVAILABLE
    } else {
        kind
    }
}

/// Artwork, title, artist, release date and kind, plus a button that hands
/// the item back through `on_action`.
#[component]
pub fn ResultItem(
    item: SearchResultItem,
    action_label: String,
    on_action: EventHandler<SearchResultItem>,
) -> Element {
    let released = released_label(&item.release_date);
    let kind = kind_label(&item.kind).to_string();
    let action_item = item.clone();

    rsx! {
        div { class: "result-item", "data-testid": "result-item",
            div { class: "item-image-background",
                img { src: "{item.artwork}", alt: "{item.title}" }
                div { class: "item-text-overlay" }
            }
            div { class: "item-details",
                h3 { "{item.title}" }
                p {
                    strong { "Artist:" }
                    " {item.artist}"
                }
                if let Some(released) = released {
                    p {
                        strong { "Released:" }
                        " {released}"
                    }
                }
                p {
                    strong { "Type:" }
                    " {kind}"
                }
                button { onclick: move |_| on_action.call(action_item.clone()), "{action_label}" }
            }
        }
    }
}
