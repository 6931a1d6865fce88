use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use gloo_timers::future::TimeoutFuture;
use shared_types::ConnectionSystem;

use super::catalog::{CategoryBrowser, CategoryProfileView, CompanyLogos};
use super::chat::ChatWidget;
use super::connections::{ConnectionSidebar, SystemModal, SystemsLoad, SystemsModal};
use super::similarity::SimilarityModal;
use super::styles::CATALOG_STYLES;
use crate::api::{fetch_connection_systems, ApiError};
use crate::catalog::CompanyFilter;
use crate::interop::{
    drain_page_keys, listen_for_escape, scroll_window_to_top, PageKey, PageKeyQueue,
};

/// Lets the catalog side of the page open the chat and ask it something.
#[derive(Clone, Copy, PartialEq)]
pub struct ChatBridge {
    pub expanded: Signal<bool>,
    pub pending_question: Signal<Option<String>>,
}

impl ChatBridge {
    /// Queue `question`; the chat widget expands and sends it.
    pub fn ask(&self, question: impl Into<String>) {
        let mut pending = self.pending_question;
        pending.set(Some(question.into()));
    }
}

/// At most one modal is open at a time
#[derive(Debug, Clone, PartialEq)]
pub enum OpenModal {
    Similarity,
    /// Systems list for narrow screens, where the sidebar is hidden
    Systems,
    System(ConnectionSystem),
}

#[component]
pub fn CatalogShell() -> Element {
    use_context_provider(|| ChatBridge {
        expanded: Signal::new(false),
        pending_question: Signal::new(None),
    });

    let companies = use_signal(CompanyFilter::default);
    let mut selected_category = use_signal(|| None::<String>);
    let mut modal = use_signal(|| None::<OpenModal>);
    let mut systems = use_signal(|| SystemsLoad::Loading);

    let close_modal = use_callback(move |_: ()| modal.set(None));

    // Escape closes whichever modal is open. The DOM listener only queues the
    // key; the pump below applies it inside the component's scope.
    let key_queue = use_hook(PageKeyQueue::default);
    let key_pump_alive = use_hook(|| Rc::new(Cell::new(true)));
    {
        let key_pump_alive = key_pump_alive.clone();
        use_drop(move || {
            key_pump_alive.set(false);
        });
    }
    let _escape = {
        let key_queue = key_queue.clone();
        use_hook(move || listen_for_escape(key_queue))
    };
    use_hook(move || {
        spawn(async move {
            while key_pump_alive.get() {
                for key in drain_page_keys(&key_queue) {
                    match key {
                        PageKey::Escape => {
                            if modal.peek().is_some() {
                                modal.set(None);
                            }
                        }
                    }
                }
                TimeoutFuture::new(16).await;
            }
        });
    });

    use_effect(move || {
        spawn(async move {
            let loaded = match fetch_connection_systems().await {
                Ok(list) => {
                    info!("Loaded {} connection systems", list.len());
                    SystemsLoad::Ready(list)
                }
                Err(ApiError::Backend(message)) => {
                    warn!("Connection systems rejected: {}", message);
                    SystemsLoad::Failed(message)
                }
                Err(e) => {
                    warn!("Connection systems unreachable: {}", e);
                    SystemsLoad::Failed("Bağlantı hatası".to_string())
                }
            };
            systems.set(loaded);
        });
    });

    let open_category = move |name: String| {
        selected_category.set(Some(name));
        scroll_window_to_top();
    };

    let open_system = move |system: ConnectionSystem| {
        modal.set(Some(OpenModal::System(system)));
    };

    rsx! {
        style { {CATALOG_STYLES} }

        div {
            class: "catalog-page",

            header {
                class: "catalog-header",
                CompanyLogos { filter: companies }
                div {
                    class: "header-actions",
                    button {
                        class: "header-button",
                        onclick: move |_| modal.set(Some(OpenModal::Similarity)),
                        "🔍 Benzer Profil Ara"
                    }
                    button {
                        class: "header-button systems-toggle",
                        onclick: move |_| modal.set(Some(OpenModal::Systems)),
                        "🔗 Sistemler"
                    }
                }
            }

            div {
                class: "catalog-body",
                main {
                    class: "catalog-main",
                    if let Some(category) = selected_category() {
                        CategoryProfileView {
                            key: "{category}",
                            category,
                            on_back: move |_| selected_category.set(None),
                        }
                    } else {
                        CategoryBrowser {
                            filter: companies,
                            on_select: open_category,
                        }
                    }
                }

                ConnectionSidebar {
                    systems: systems(),
                    on_select: open_system,
                }
            }

            match modal() {
                Some(OpenModal::Similarity) => rsx! {
                    SimilarityModal { on_close: close_modal }
                },
                Some(OpenModal::Systems) => rsx! {
                    SystemsModal {
                        systems: systems(),
                        on_select: open_system,
                        on_close: close_modal,
                    }
                },
                Some(OpenModal::System(system)) => rsx! {
                    SystemModal {
                        key: "{system.name}",
                        system,
                        on_close: close_modal,
                    }
                },
                None => rsx! {},
            }

            ChatWidget {}
        }
    }
}
