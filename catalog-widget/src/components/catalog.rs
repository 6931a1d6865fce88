use std::collections::{HashMap, HashSet};

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use shared_types::{CategoryGroups, Company, ProfileRecord};

use super::{LoadState, ProfileImage};
use crate::api::{fetch_categories, fetch_category_profiles};
use crate::catalog::{
    category_summary, filter_categories, mold_available, mold_status_text, non_blank,
    score_percent, CategoryGroup, CompanyFilter, SimilarityBand,
};
use crate::interop::{is_mobile_viewport, scroll_window_to_top};

// ============================================================================
// Company filter
// ============================================================================

#[component]
pub fn CompanyLogos(mut filter: Signal<CompanyFilter>) -> Element {
    rsx! {
        div {
            class: "company-logos",
            for company in Company::ALL {
                button {
                    key: "{company.as_str()}",
                    class: if filter.read().is_active(company) { "company-logo active" } else { "company-logo" },
                    "data-company": company.as_str(),
                    onclick: move |_| filter.write().toggle(company),
                    "{company.as_str()}"
                }
            }
        }
    }
}

// ============================================================================
// Category browser
// ============================================================================

#[component]
pub fn CategoryBrowser(filter: Signal<CompanyFilter>, on_select: Callback<String>) -> Element {
    let mut groups = use_signal(|| LoadState::<CategoryGroups>::Loading);
    let mut collapsed = use_signal(|| {
        if is_mobile_viewport() {
            CategoryGroup::ALL.into_iter().collect()
        } else {
            HashSet::new()
        }
    });
    let mut queries = use_signal(HashMap::<CategoryGroup, String>::new);

    // Reload whenever the company selection changes
    use_effect(move || {
        let companies = filter.read().query_value();
        groups.set(LoadState::Loading);
        spawn(async move {
            match fetch_categories(companies.as_deref()).await {
                Ok(response) => {
                    info!("Categories loaded for {:?}", companies);
                    groups.set(LoadState::Ready(response.categories));
                }
                Err(e) => {
                    error!("Failed to load categories: {}", e);
                    groups.set(LoadState::Failed);
                }
            }
        });
    });

    let loaded = groups();
    rsx! {
        div {
            class: "category-browser",
            match loaded {
                LoadState::Loading => rsx! {
                    div { class: "loading-text", "Kategoriler yükleniyor..." }
                },
                LoadState::Failed => rsx! {
                    div { class: "error-text", "Kategoriler yüklenemedi. Backend çalışıyor mu?" }
                },
                LoadState::Ready(all) => rsx! {
                    for group in CategoryGroup::ALL {
                        if !group.categories(&all).is_empty() {
                            CategoryGroupSection {
                                key: "{group.key()}",
                                group,
                                categories: group.categories(&all).to_vec(),
                                collapsed: collapsed.read().contains(&group),
                                query: queries.read().get(&group).cloned().unwrap_or_default(),
                                on_toggle: move |_| {
                                    let mut set = collapsed.write();
                                    if !set.remove(&group) {
                                        set.insert(group);
                                    }
                                },
                                on_query: move |text: String| {
                                    queries.write().insert(group, text);
                                },
                                on_select,
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CategoryGroupSection(
    group: CategoryGroup,
    categories: Vec<String>,
    collapsed: bool,
    query: String,
    on_toggle: Callback<()>,
    on_query: Callback<String>,
    on_select: Callback<String>,
) -> Element {
    let matches: Vec<String> = filter_categories(&categories, &query)
        .into_iter()
        .cloned()
        .collect();
    let no_results = matches.is_empty() && !query.trim().is_empty();

    rsx! {
        section {
            class: "category-group",
            "data-group": group.key(),
            button {
                class: "category-group-header",
                onclick: move |_| on_toggle.call(()),
                span { "{group.title()}" }
                span { if collapsed { "▸" } else { "▾" } }
            }
            if !collapsed {
                div {
                    class: "category-group-body",
                    input {
                        class: "category-search",
                        placeholder: "Kategori ara...",
                        value: "{query}",
                        oninput: move |e| on_query.call(e.value()),
                    }
                    if no_results {
                        div { class: "no-results", "Sonuç bulunamadı" }
                    } else {
                        div {
                            class: "category-list",
                            for name in matches {
                                button {
                                    key: "{name}",
                                    class: "category-chip",
                                    onclick: {
                                        let name = name.clone();
                                        move |_| on_select.call(name.clone())
                                    },
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Category profiles
// ============================================================================

#[component]
pub fn CategoryProfileView(category: String, on_back: Callback<()>) -> Element {
    let mut profiles = use_signal(|| LoadState::<Vec<ProfileRecord>>::Loading);
    let mut zoomed = use_signal(|| None::<String>);

    let name = category.clone();
    use_hook(move || {
        spawn(async move {
            match fetch_category_profiles(&name).await {
                Ok(list) => {
                    info!("Category {} has {} profiles", name, list.len());
                    profiles.set(LoadState::Ready(list));
                }
                Err(e) => {
                    error!("Failed to load category {}: {}", name, e);
                    profiles.set(LoadState::Failed);
                }
            }
        });
    });

    let loaded = profiles();
    rsx! {
        div {
            class: "category-profile-view",
            div {
                class: "profile-view-header",
                button {
                    class: "back-button",
                    onclick: move |_| {
                        on_back.call(());
                        scroll_window_to_top();
                    },
                    "← Geri"
                }
                h2 { style: "margin: 0;", "{category}" }
            }

            match loaded {
                LoadState::Loading => rsx! {
                    div { class: "loading-text", "Profiller yükleniyor..." }
                },
                LoadState::Failed => rsx! {
                    div { class: "error-text", "Profiller yüklenemedi." }
                },
                LoadState::Ready(list) if list.is_empty() => rsx! {
                    div { class: "no-results", "Bu kategoride profil bulunamadı." }
                },
                LoadState::Ready(list) => rsx! {
                    div {
                        class: "profile-grid",
                        for record in list {
                            ProfileCard {
                                key: "{record.code}",
                                zoomed: zoomed.read().as_deref() == Some(record.code.as_str()),
                                record: record.clone(),
                                on_zoom: move |code: String| {
                                    let next = if zoomed.read().as_deref() == Some(code.as_str()) {
                                        None
                                    } else {
                                        Some(code)
                                    };
                                    zoomed.set(next);
                                },
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub fn ProfileCard(record: ProfileRecord, zoomed: bool, on_zoom: Callback<String>) -> Element {
    let mold_status = mold_status_text(record.mold_status.as_deref()).to_string();
    let customer = non_blank(record.customer.as_deref()).map(str::to_string);
    let description = non_blank(record.description.as_deref()).map(str::to_string);
    let mold_class = if mold_available(&mold_status) {
        "mold-status available"
    } else {
        "mold-status"
    };
    let badge = record.similarity_score.map(|score| {
        (
            format!("similarity-badge {}", SimilarityBand::from_score(score).class()),
            score_percent(score),
        )
    });
    let categories = category_summary(&record);
    let image_class = if zoomed {
        "profile-card-image zoomed"
    } else {
        "profile-card-image"
    };
    let code = record.code.clone();

    rsx! {
        div {
            class: "profile-card",
            "data-code": "{record.code}",

            if let Some((class, percent)) = badge {
                span { class: "{class}", "%{percent} Benzer" }
            }

            div {
                onclick: move |e| {
                    e.stop_propagation();
                    on_zoom.call(code.clone());
                },
                ProfileImage {
                    code: record.code.clone(),
                    class: image_class.to_string(),
                }
            }

            div { class: "profile-code", "{record.code}" }
            if let Some(customer) = customer {
                div { class: "profile-meta", "Müşteri: {customer}" }
            }
            if let Some(description) = description {
                div { class: "profile-meta", "{description}" }
            }
            if let Some(categories) = categories {
                div { class: "profile-meta", "Kategoriler: {categories}" }
            }
            div { class: "{mold_class}", "Kalıp: {mold_status}" }
        }
    }
}
