//! Page components: the catalog shell, the chat widget and the modals opened
//! from the header.

use dioxus::prelude::*;

use crate::config::{endpoints, image_src};

pub mod catalog;
pub mod chat;
pub mod connections;
pub mod shell;
pub mod similarity;
pub mod styles;

pub use catalog::{CategoryBrowser, CategoryProfileView, CompanyLogos, ProfileCard};
pub use chat::ChatWidget;
pub use connections::{ConnectionSidebar, SystemModal, SystemsLoad, SystemsModal};
pub use shell::{CatalogShell, ChatBridge, OpenModal};
pub use similarity::SimilarityModal;

/// Progress of a one-shot fetch driving part of the page
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed,
}

/// Darkened backdrop with a centred panel. Clicking the backdrop closes it.
#[component]
pub fn ModalOverlay(title: String, on_close: Callback<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { style: "margin: 0;", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                {children}
            }
        }
    }
}

/// Profile image that swaps to the "Görsel Yok" tile if the backend has no
/// picture for `code`.
#[component]
pub fn ProfileImage(code: String, class: String) -> Element {
    let mut failed = use_signal(|| false);
    let src = image_src(endpoints(), &code, failed());

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{code}",
            onerror: move |_| failed.set(true),
        }
    }
}
