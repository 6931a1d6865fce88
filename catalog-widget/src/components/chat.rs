use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, error, info};
use gloo_timers::future::TimeoutFuture;
use shared_types::{MessageId, Sender};

use super::shell::ChatBridge;
use super::styles::CHAT_STYLES;
use crate::api::send_chat_message;
use crate::catalog::non_blank;
use crate::chat_log::{ChatLog, LogEntry};
use crate::config::{profile_image_url, MAX_LOG_MESSAGES, REVEAL_DELAY_MS, SCROLL_SETTLE_MS};
use crate::interop::{focus_element, scroll_into_view, scroll_to_bottom, ScrollAnchor};
use crate::pagination::{LoadMoreLabel, PaginationSnapshot, RevealedProfile};

const MESSAGES_DOM_ID: &str = "chatMessages";
const INPUT_DOM_ID: &str = "chatInput";

pub fn message_dom_id(id: &MessageId) -> String {
    format!("message-{id}")
}

pub fn load_more_dom_id(id: &MessageId) -> String {
    format!("load-more-{id}")
}

#[component]
pub fn ChatWidget() -> Element {
    let bridge = use_context::<ChatBridge>();
    let mut expanded = bridge.expanded;
    let mut pending_question = bridge.pending_question;
    let mut log = use_signal(|| ChatLog::new(MAX_LOG_MESSAGES));
    let mut input_text = use_signal(String::new);
    let mut requests_in_flight = use_signal(|| 0usize);

    let send_message = use_callback(move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }

        let history = log.read().history_for_request();
        log.write().push_user(&text);
        input_text.set(String::new());
        requests_in_flight.set(requests_in_flight() + 1);

        spawn(async move {
            TimeoutFuture::new(SCROLL_SETTLE_MS).await;
            scroll_to_bottom(MESSAGES_DOM_ID);

            let reply = send_chat_message(&text, history).await;
            let reply_id = {
                let mut chat = log.write();
                match reply {
                    Ok(response) => {
                        if let Some(history) = response.conversation_history {
                            chat.replace_history(history);
                        }
                        let profiles = response.profile_data.unwrap_or_default();
                        debug!("Chat reply carries {} profiles", profiles.len());
                        chat.push_assistant(&response.message, profiles)
                    }
                    Err(e) => {
                        error!("Chat request failed: {}", e);
                        chat.push_apology()
                    }
                }
            };
            requests_in_flight.set(requests_in_flight().saturating_sub(1));

            TimeoutFuture::new(SCROLL_SETTLE_MS).await;
            scroll_into_view(&message_dom_id(&reply_id), ScrollAnchor::Start);
        });
    });

    // Questions handed over from other parts of the page
    use_effect(move || {
        let Some(question) = pending_question() else {
            return;
        };
        pending_question.set(None);
        expanded.set(true);
        send_message.call(question);
    });

    use_effect(move || {
        if expanded() {
            spawn(async move {
                TimeoutFuture::new(0).await;
                focus_element(INPUT_DOM_ID);
            });
        }
    });

    let reveal_more = use_callback(move |id: MessageId| {
        if !log.write().pagination_mut().begin_reveal(&id) {
            debug!("Load-more for {} ignored", id);
            return;
        }

        spawn(async move {
            TimeoutFuture::new(REVEAL_DELAY_MS).await;

            let outcome = log.write().pagination_mut().complete_reveal(&id);
            let Some(outcome) = outcome else {
                debug!("Message {} left the log before its batch arrived", id);
                return;
            };

            TimeoutFuture::new(SCROLL_SETTLE_MS).await;
            if outcome.is_complete() {
                scroll_into_view(&message_dom_id(&id), ScrollAnchor::End);
            } else {
                scroll_into_view(&load_more_dom_id(&id), ScrollAnchor::Center);
            }
        });
    });

    let reset_conversation = move |_| {
        log.write().reset();
        info!("Conversation reset");
    };

    let entries: Vec<(LogEntry, Option<PaginationSnapshot>)> = {
        let chat = log.read();
        chat.entries()
            .map(|entry| {
                let pagination = chat
                    .pagination()
                    .get(&entry.message.id)
                    .map(|state| state.snapshot());
                (entry.clone(), pagination)
            })
            .collect()
    };

    rsx! {
        style { {CHAT_STYLES} }

        div {
            id: "chatWidget",
            class: if expanded() { "chat-widget expanded" } else { "chat-widget" },

            if !expanded() {
                button {
                    class: "chat-minimized",
                    onclick: move |_| expanded.set(true),
                    span { class: "chat-launcher-icon", "💬" }
                    span { "ALUNA'ya Sorun" }
                }
            } else {
                div {
                    class: "chat-expanded",

                    div {
                        class: "chat-header",
                        div {
                            class: "chat-title",
                            span { class: "chat-name", "ALUNA" }
                            span { class: "chat-subtitle", "Alüminyum Profil Asistanı" }
                        }
                        div {
                            class: "chat-header-actions",
                            button {
                                class: "chat-header-button",
                                title: "Sohbeti sıfırla",
                                onclick: reset_conversation,
                                "↺"
                            }
                            button {
                                class: "chat-header-button",
                                title: "Kapat",
                                onclick: move |_| expanded.set(false),
                                "✕"
                            }
                        }
                    }

                    div {
                        id: MESSAGES_DOM_ID,
                        class: "chat-messages",
                        for (entry, pagination) in entries {
                            MessageView {
                                key: "{entry.message.id}",
                                entry: entry.clone(),
                                pagination,
                                on_load_more: reveal_more,
                            }
                        }
                        if requests_in_flight() > 0 {
                            TypingIndicator {}
                        }
                    }

                    div {
                        class: "chat-input-area",
                        input {
                            id: INPUT_DOM_ID,
                            class: "chat-input",
                            placeholder: "Profil arayın... (örn: 100 kutu)",
                            value: "{input_text}",
                            oninput: move |e| input_text.set(e.value()),
                            onkeydown: move |e| {
                                if e.key() == Key::Enter {
                                    send_message.call(input_text());
                                }
                            }
                        }
                        button {
                            class: "send-button",
                            disabled: input_text.read().trim().is_empty(),
                            onclick: move |_| send_message.call(input_text()),
                            "➤"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MessageView(
    entry: LogEntry,
    pagination: Option<PaginationSnapshot>,
    on_load_more: Callback<MessageId>,
) -> Element {
    let is_user = matches!(entry.message.sender, Sender::User);
    let id = entry.message.id.clone();
    let dom_id = message_dom_id(&id);
    let (revealed, control, in_flight) = match pagination {
        Some(snapshot) => (snapshot.revealed, snapshot.control, snapshot.in_flight),
        None => (Vec::new(), None, false),
    };

    rsx! {
        div {
            id: "{dom_id}",
            class: if is_user { "message user" } else { "message assistant" },
            "data-message-id": "{id}",

            div {
                class: "message-content",
                div { class: "message-body", dangerous_inner_html: "{entry.html}" }

                for profile in revealed {
                    RevealedProfileBlock { key: "{profile.ordinal}", profile: profile.clone() }
                }

                if let Some(label) = control {
                    LoadMoreButton {
                        message_id: id.clone(),
                        label,
                        in_flight,
                        on_load_more,
                    }
                }
            }
        }
    }
}

/// A profile appended by load-more, laid out like the backend's own list
/// entries.
#[component]
pub fn RevealedProfileBlock(profile: RevealedProfile) -> Element {
    let record = profile.record;
    let image_url = profile_image_url(&record.code);
    let category = non_blank(record.category.as_deref()).map(str::to_string);
    let customer = non_blank(record.customer.as_deref()).map(str::to_string);
    let mold_status = non_blank(record.mold_status.as_deref()).map(str::to_string);

    rsx! {
        div {
            class: "revealed-profile",
            strong { "{profile.ordinal}. {record.code}" }
            img {
                src: "{image_url}",
                alt: "{record.code}",
                class: "chat-profile-image",
            }
            if let Some(category) = category {
                div { class: "revealed-profile-field", "Kategori: {category}" }
            }
            if let Some(customer) = customer {
                div { class: "revealed-profile-field", "Müşteri: {customer}" }
            }
            if let Some(mold_status) = mold_status {
                div { class: "revealed-profile-field", "Kalıp: {mold_status}" }
            }
        }
    }
}

#[component]
pub fn LoadMoreButton(
    message_id: MessageId,
    label: LoadMoreLabel,
    in_flight: bool,
    on_load_more: Callback<MessageId>,
) -> Element {
    let dom_id = load_more_dom_id(&message_id);

    rsx! {
        button {
            id: "{dom_id}",
            class: "load-more-button",
            "data-message-id": "{message_id}",
            disabled: in_flight,
            onclick: move |_| on_load_more.call(message_id.clone()),

            if in_flight {
                TypingDots {}
            } else {
                svg {
                    class: "load-more-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    polyline { points: "6 9 12 15 18 9" }
                }
                span { class: "load-more-text", "{label.action_text()}" }
                span { class: "load-more-count", "{label.count_text()}" }
            }
        }
    }
}

#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div {
            class: "message assistant",
            div {
                class: "typing-indicator",
                TypingDots {}
            }
        }
    }
}

#[component]
fn TypingDots() -> Element {
    rsx! {
        span { class: "typing-dot" }
        span { class: "typing-dot" }
        span { class: "typing-dot" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_derived_from_message_id() {
        let id = MessageId("msg_abc".to_string());
        assert_eq!(message_dom_id(&id), "message-msg_abc");
        assert_eq!(load_more_dom_id(&id), "load-more-msg_abc");
    }
}
