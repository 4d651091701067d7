//! Search input, media filter and search button - controlled by the parent

use dioxus::prelude::*;
use spectra_core::MediaType;

#[component]
pub fn SearchBar(
    term: String,
    media: MediaType,
    on_term_change: EventHandler<String>,
    on_media_change: EventHandler<MediaType>,
    on_search: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "search-bar",
            input {
                r#type: "text",
                placeholder: "Enter search term...",
                value: "{term}",
                oninput: move |e| on_term_change.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        on_search.call(());
                    }
                },
            }
            select {
                value: media.as_str(),
                onchange: move |e| {
                    // Options only carry known values.
                    if let Ok(media) = e.value().parse::<MediaType>() {
                        on_media_change.call(media);
                    }
                },
                for choice in MediaType::ALL {
                    option {
                        key: "{choice}",
                        value: choice.as_str(),
                        selected: choice == media,
                        {choice.label()}
                    }
                }
            }
            button { onclick: move |_| on_search.call(()), "Search" }
        }
    }
}
