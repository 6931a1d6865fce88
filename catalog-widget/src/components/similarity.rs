use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use shared_types::SimilarityHit;

use super::shell::ChatBridge;
use super::{ModalOverlay, ProfileImage};
use crate::api::fetch_similar_profiles;
use crate::catalog::{normalize_profile_code, parse_similarity_count, score_percent, SimilarityBand};
use crate::config::{endpoints, DEFAULT_SIMILARITY_COUNT};

#[derive(Debug, Clone, PartialEq)]
enum SearchState {
    Idle,
    Searching,
    Done {
        query: String,
        results: Vec<SimilarityHit>,
    },
    Failed(String),
}

#[component]
pub fn SimilarityModal(on_close: Callback<()>) -> Element {
    let bridge = use_context::<ChatBridge>();
    let mut code_input = use_signal(String::new);
    let mut count_input = use_signal(|| DEFAULT_SIMILARITY_COUNT.to_string());
    let mut validation = use_signal(|| None::<&'static str>);
    let mut state = use_signal(|| SearchState::Idle);

    let run_search = use_callback(move |_: ()| {
        let Some(code) = normalize_profile_code(&code_input()) else {
            validation.set(Some("Lütfen bir profil kodu girin!"));
            return;
        };
        validation.set(None);
        let top_k = parse_similarity_count(&count_input());
        state.set(SearchState::Searching);

        spawn(async move {
            match fetch_similar_profiles(&code, top_k).await {
                Ok(results) => {
                    info!("{} profiles similar to {}", results.len(), code);
                    state.set(SearchState::Done {
                        query: code,
                        results,
                    });
                }
                Err(e) => {
                    error!("Similarity search for {} failed: {}", code, e);
                    state.set(SearchState::Failed(e.to_string()));
                }
            }
        });
    });

    let ask_about = move |code: String| {
        on_close.call(());
        bridge.ask(code);
    };

    rsx! {
        ModalOverlay {
            title: "🔍 Benzer Profil Arama",
            on_close,

            div {
                class: "similarity-form",
                input {
                    class: "similarity-code-input",
                    placeholder: "Profil kodu (örn: AP0001)",
                    value: "{code_input}",
                    oninput: move |e| code_input.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            run_search.call(());
                        }
                    }
                }
                input {
                    class: "similarity-count-input",
                    r#type: "number",
                    min: "1",
                    value: "{count_input}",
                    oninput: move |e| count_input.set(e.value()),
                }
                button {
                    class: "header-button",
                    disabled: state() == SearchState::Searching,
                    onclick: move |_| run_search.call(()),
                    "Ara"
                }
            }

            if let Some(message) = validation() {
                div { class: "validation-text", "{message}" }
            }

            match state() {
                SearchState::Idle => rsx! {},
                SearchState::Searching => rsx! {
                    div { class: "loading-text", "Benzer profiller aranıyor..." }
                },
                SearchState::Failed(message) => rsx! {
                    div {
                        class: "error-text",
                        p { "Hata: {message}" }
                        p { style: "font-size: 0.8rem;", "Backend: {endpoints().similarity}" }
                    }
                },
                SearchState::Done { results, .. } if results.is_empty() => rsx! {
                    div { class: "no-results", "Benzer profil bulunamadı" }
                },
                SearchState::Done { query, results } => rsx! {
                    div {
                        class: "query-card",
                        ProfileImage { code: query.clone(), class: "query-image".to_string() }
                        div {
                            strong { "{query}" }
                            p { style: "margin: 0.25rem 0 0;", "📊 {results.len()} Benzer Profil Bulundu" }
                        }
                    }
                    div {
                        class: "profile-grid",
                        for hit in results {
                            SimilarityResultCard {
                                key: "{hit.profile_code}",
                                hit: hit.clone(),
                                on_select: ask_about,
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn SimilarityResultCard(hit: SimilarityHit, on_select: Callback<String>) -> Element {
    let band = SimilarityBand::from_score(hit.similarity_score);
    let percent = score_percent(hit.similarity_score);
    let code = hit.profile_code.clone();

    rsx! {
        div {
            class: "profile-card",
            onclick: move |_| on_select.call(code.clone()),
            span {
                class: "similarity-badge {band.class()}",
                style: "background: {band.gradient()};",
                "%{percent}"
            }
            ProfileImage {
                code: hit.profile_code.clone(),
                class: "profile-card-image".to_string(),
            }
            div { class: "profile-code", "{hit.profile_code}" }
        }
    }
}
