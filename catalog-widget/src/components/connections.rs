use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};
use shared_types::{ConnectionSystem, ProfileRecord};

use super::ModalOverlay;
use crate::api::search_catalog;
use crate::catalog::{
    category_summary, connection_parts, dimension_summary, empty_system_notice, mold_icon,
    non_blank, search_code, system_part_codes, ConnectionPart,
};
use crate::config::profile_image_url;

/// Connection systems as shown by the sidebar and the mobile systems modal
#[derive(Debug, Clone, PartialEq)]
pub enum SystemsLoad {
    Loading,
    Ready(Vec<ConnectionSystem>),
    /// User-facing reason
    Failed(String),
}

/// Catalog details for one part of a connection profile
#[derive(Debug, Clone, PartialEq)]
enum PartDetail {
    Loading,
    Found(ProfileRecord),
    Missing,
}

#[component]
pub fn ConnectionSidebar(systems: SystemsLoad, on_select: Callback<ConnectionSystem>) -> Element {
    rsx! {
        aside {
            class: "connection-sidebar",
            h3 { class: "sidebar-title", "🔗 Bağlantı Sistemleri" }
            SystemList { systems, on_select }
        }
    }
}

/// The systems list in a modal, for screens too narrow for the sidebar.
/// Picking a system hands over to its own modal.
#[component]
pub fn SystemsModal(
    systems: SystemsLoad,
    on_select: Callback<ConnectionSystem>,
    on_close: Callback<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: "🔗 Bağlantı Sistemleri",
            on_close,
            SystemList { systems, on_select }
        }
    }
}

#[component]
fn SystemList(systems: SystemsLoad, on_select: Callback<ConnectionSystem>) -> Element {
    match systems {
        SystemsLoad::Loading => rsx! {
            div { class: "loading-text", "Yükleniyor..." }
        },
        SystemsLoad::Failed(reason) => rsx! {
            div { class: "error-text", "{reason}" }
        },
        SystemsLoad::Ready(list) if list.is_empty() => rsx! {
            div { class: "no-results", "Sistem bulunamadı" }
        },
        SystemsLoad::Ready(list) => rsx! {
            for system in list {
                button {
                    key: "{system.name}",
                    class: "system-item",
                    onclick: {
                        let system = system.clone();
                        move |_| on_select.call(system.clone())
                    },
                    "{system.name}"
                    span {
                        style: "float: right; color: #64748b;",
                        "{system.profiles.len()}"
                    }
                }
            }
        },
    }
}

#[component]
pub fn SystemModal(system: ConnectionSystem, on_close: Callback<()>) -> Element {
    let mut details = use_signal(HashMap::<String, PartDetail>::new);

    let codes = system_part_codes(&system);

    // One lookup at a time, in display order
    use_hook(move || {
        spawn(async move {
            for code in codes {
                if details.read().contains_key(&code) {
                    continue;
                }
                details.write().insert(code.clone(), PartDetail::Loading);

                let detail = match search_catalog(&search_code(&code)).await {
                    Ok(results) => match results.into_iter().next() {
                        Some(record) => PartDetail::Found(record),
                        None => {
                            debug!("No catalog entry for system part {}", code);
                            PartDetail::Missing
                        }
                    },
                    Err(e) => {
                        warn!("Detail lookup for {} failed: {}", code, e);
                        PartDetail::Missing
                    }
                };
                details.write().insert(code, detail);
            }
        });
    });

    rsx! {
        ModalOverlay {
            title: "{system.name}",
            on_close,
            if let Some(notice) = empty_system_notice(&system) {
                p { class: "no-results", "{notice}" }
            }
            for profile in system.profiles.iter() {
                div {
                    key: "{profile.connection_code}",
                    class: "system-profile",
                    strong { "{profile.connection_code}" }
                    if !profile.name.is_empty() {
                        span { style: "margin-left: 0.5rem; color: #64748b;", "{profile.name}" }
                    }
                    for part in connection_parts(profile) {
                        SystemPart {
                            key: "{part.label}-{part.code}",
                            detail: details.read().get(&part.code).cloned().unwrap_or(PartDetail::Loading),
                            part: part.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SystemPart(part: ConnectionPart, detail: PartDetail) -> Element {
    let image_url = profile_image_url(&part.code);

    rsx! {
        div {
            class: "system-part",
            img {
                class: "system-part-image",
                src: "{image_url}",
                alt: "{part.code}",
            }
            div {
                div { class: "system-part-label", "{part.label}" }
                strong { "{part.code}" }
                match detail {
                    PartDetail::Loading => rsx! {
                        div { class: "profile-meta", "Yükleniyor..." }
                    },
                    PartDetail::Missing => rsx! {
                        div { class: "profile-meta", "🔗 Sistem Profili" }
                    },
                    PartDetail::Found(record) => rsx! {
                        PartDetails { record }
                    },
                }
            }
        }
    }
}

#[component]
fn PartDetails(record: ProfileRecord) -> Element {
    let categories = category_summary(&record);
    let customer = non_blank(record.customer.as_deref()).map(str::to_string);
    let mold = non_blank(record.mold_status.as_deref())
        .map(|status| format!("{} {}", mold_icon(status), status));
    let dimensions = record.dimensions.as_ref().and_then(dimension_summary);

    rsx! {
        if let Some(categories) = categories {
            div { class: "profile-meta", "📁 {categories}" }
        }
        if let Some(customer) = customer {
            div { class: "profile-meta", "👤 {customer}" }
        }
        if let Some(mold) = mold {
            div { class: "profile-meta", "Kalıp: {mold}" }
        }
        if let Some(dimensions) = dimensions {
            div { class: "profile-meta", "📐 {dimensions}" }
        }
    }
}
