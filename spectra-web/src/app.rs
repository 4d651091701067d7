use dioxus::prelude::*;
use spectra_core::{Favourites, MediaType, SearchResultItem, SearchSession};

use crate::api;
use crate::components::{FavouriteList, SearchBar, SearchResults};
use crate::storage::LocalStorage;

/// Search page: fetches a token on mount, runs searches, and keeps the
/// favourites list in local storage.
#[component]
pub fn App() -> Element {
    let client = use_hook(api::client);
    let mut session = use_signal(SearchSession::new);
    let mut favourites = use_signal(|| Favourites::load(LocalStorage));

    let token_client = client.clone();
    use_future(move || {
        let client = token_client.clone();
        async move {
            let result = client.generate_token().await;
            session.write().token_loaded(result);
        }
    });

    let run_search = move |_: ()| {
        // Validation failures already set the visible error.
        let Ok(request) = session.write().begin_search() else {
            return;
        };

        let client = client.clone();
        spawn(async move {
            let result = client
                .search(&request.term, request.media, &request.token)
                .await;
            session.write().finish_search(request.generation, result);
        });
    };

    let current = session.read().clone();
    let saved = favourites.read().items().to_vec();

    rsx! {
        div { class: "App",
            h1 { class: "app-logo", "SpectraFlow" }
            SearchBar {
                term: current.term.clone(),
                media: current.media,
                on_term_change: move |term: String| session.write().set_term(term),
                on_media_change: move |media: MediaType| session.write().set_media(media),
                on_search: run_search,
            }
            if current.is_loading() {
                p { "Loading search results..." }
            }
            if let Some(error) = current.error.clone() {
                p { class: "error", "{error}" }
            }
            div { class: "content-container",
                div { class: "search-results-section",
                    h2 { "Search Results" }
                    SearchResults {
                        results: current.results.clone(),
                        on_add_to_favourites: move |item: SearchResultItem| {
                            favourites.write().add(item);
                        },
                    }
                }
                div { class: "favourites-section",
                    h2 { "My Favourites" }
                    FavouriteList {
                        favourites: saved,
                        on_remove_from_favourites: move |item: SearchResultItem| {
                            favourites.write().remove(item.id);
                        },
                    }
                }
            }
        }
    }
}
