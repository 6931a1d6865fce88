//! Load-more pagination for profile lists attached to chat messages.
//!
//! The first batch of a long list is rendered from the image placeholders in
//! the assistant's text. Later batches are synthesised from the structured
//! records, so each state remembers where the text-derived part ended.
//!
//! A state moves from partial to complete exactly once and never back. The
//! reveal itself is split around the UI delay: [`PaginationStore::begin_reveal`]
//! claims the per-message in-flight flag, [`PaginationStore::complete_reveal`]
//! appends the batch and releases it.

use std::collections::HashMap;
use std::fmt;

use shared_types::{MessageId, ProfileRecord};

use crate::markup::format_with_image_limit;

/// Label for the load-more control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreLabel {
    pub next_batch: usize,
    pub remaining: usize,
}

impl LoadMoreLabel {
    pub fn action_text(&self) -> String {
        format!("{} Profil Daha Göster", self.next_batch)
    }

    pub fn count_text(&self) -> String {
        format!("({} kaldı)", self.remaining)
    }
}

impl fmt::Display for LoadMoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action_text(), self.count_text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Partial,
    Complete,
}

/// A record appended by a load-more batch, with its 1-based position in the
/// full list.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealedProfile {
    pub ordinal: usize,
    pub record: ProfileRecord,
}

/// Result of one completed reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealOutcome {
    pub appended: usize,
    pub revealed: usize,
    /// `None` once the list is exhausted and the control is gone
    pub next: Option<LoadMoreLabel>,
}

impl RevealOutcome {
    pub fn is_complete(&self) -> bool {
        self.next.is_none()
    }
}

/// What the view needs to draw a paginated message
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationSnapshot {
    pub revealed: Vec<RevealedProfile>,
    pub control: Option<LoadMoreLabel>,
    pub in_flight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    items: Vec<ProfileRecord>,
    initial_revealed: usize,
    revealed: usize,
    batch_size: usize,
    in_flight: bool,
}

impl PaginationState {
    /// `revealed` is clamped to the list length and `batch_size` to at least 1.
    pub fn new(items: Vec<ProfileRecord>, revealed: usize, batch_size: usize) -> Self {
        let revealed = revealed.min(items.len());
        Self {
            items,
            initial_revealed: revealed,
            revealed,
            batch_size: batch_size.max(1),
            in_flight: false,
        }
    }

    pub fn items(&self) -> &[ProfileRecord] {
        &self.items
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.revealed
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn phase(&self) -> RevealPhase {
        if self.revealed == self.items.len() {
            RevealPhase::Complete
        } else {
            RevealPhase::Partial
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == RevealPhase::Complete
    }

    /// Label for the control, or `None` when no control should exist.
    pub fn control(&self) -> Option<LoadMoreLabel> {
        let remaining = self.remaining();
        (remaining > 0).then(|| LoadMoreLabel {
            next_batch: remaining.min(self.batch_size),
            remaining,
        })
    }

    /// Records appended by load-more so far, in list order.
    pub fn synthesized(&self) -> Vec<RevealedProfile> {
        self.items[self.initial_revealed..self.revealed]
            .iter()
            .enumerate()
            .map(|(offset, record)| RevealedProfile {
                ordinal: self.initial_revealed + offset + 1,
                record: record.clone(),
            })
            .collect()
    }

    pub fn snapshot(&self) -> PaginationSnapshot {
        PaginationSnapshot {
            revealed: self.synthesized(),
            control: self.control(),
            in_flight: self.in_flight,
        }
    }

    fn begin(&mut self) -> bool {
        if self.in_flight || self.is_complete() {
            return false;
        }
        self.in_flight = true;
        true
    }

    fn advance(&mut self) -> Option<RevealOutcome> {
        self.in_flight = false;
        if self.is_complete() {
            return None;
        }

        let end = (self.revealed + self.batch_size).min(self.items.len());
        let appended = end - self.revealed;
        self.revealed = end;

        Some(RevealOutcome {
            appended,
            revealed: self.revealed,
            next: self.control(),
        })
    }
}

/// Pagination states keyed by the message that owns them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationStore {
    states: HashMap<MessageId, PaginationState>,
}

impl PaginationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: MessageId, state: PaginationState) {
        self.states.insert(id, state);
    }

    pub fn get(&self, id: &MessageId) -> Option<&PaginationState> {
        self.states.get(id)
    }

    pub fn remove(&mut self, id: &MessageId) -> Option<PaginationState> {
        self.states.remove(id)
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Claim the message's reveal slot. Returns `false` (and changes nothing)
    /// when the message has no state, is complete, or already has a reveal in
    /// flight.
    pub fn begin_reveal(&mut self, id: &MessageId) -> bool {
        self.states.get_mut(id).is_some_and(PaginationState::begin)
    }

    /// Append the next batch and release the reveal slot. `None` when the
    /// message is gone or already complete.
    pub fn complete_reveal(&mut self, id: &MessageId) -> Option<RevealOutcome> {
        self.states.get_mut(id).and_then(PaginationState::advance)
    }

    /// Begin and complete in one step.
    pub fn reveal_next(&mut self, id: &MessageId) -> Option<RevealOutcome> {
        if !self.begin_reveal(id) {
            return None;
        }
        self.complete_reveal(id)
    }
}

/// Initial rendering of a message body and its profile list
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMessage {
    pub html: String,
    /// Present only when the list did not fit in the initial reveal
    pub pagination: Option<PaginationState>,
}

/// Render `text`, paginating `items` when there are more than
/// `initial_batch_size` of them.
pub fn render(
    text: &str,
    items: Vec<ProfileRecord>,
    initial_batch_size: usize,
    batch_size: usize,
) -> RenderedMessage {
    if items.len() <= initial_batch_size {
        return RenderedMessage {
            html: format_with_image_limit(text, usize::MAX).html,
            pagination: None,
        };
    }

    let formatted = format_with_image_limit(text, initial_batch_size);
    let state = PaginationState::new(items, formatted.images_rendered, batch_size);

    RenderedMessage {
        html: formatted.html,
        pagination: Some(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<ProfileRecord> {
        (1..=count)
            .map(|n| ProfileRecord::with_code(format!("AP{n:04}")))
            .collect()
    }

    fn text_with_images(count: usize) -> String {
        (1..=count)
            .map(|n| format!("**{n}. AP{n:04}**\n![AP{n:04}](http://img/AP{n:04})\n"))
            .collect()
    }

    #[test]
    fn short_list_renders_inline_without_state() {
        let rendered = render(&text_with_images(10), records(10), 15, 15);
        assert!(rendered.pagination.is_none());
        assert_eq!(rendered.html.matches("<img").count(), 10);
    }

    #[test]
    fn list_of_exactly_initial_batch_is_not_paginated() {
        let rendered = render(&text_with_images(15), records(15), 15, 15);
        assert!(rendered.pagination.is_none());
    }

    #[test]
    fn empty_list_renders_without_state() {
        let rendered = render("Sonuç bulunamadı.", Vec::new(), 15, 15);
        assert!(rendered.pagination.is_none());
        assert_eq!(rendered.html, "Sonuç bulunamadı.");
    }

    #[test]
    fn long_list_keeps_first_batch_of_placeholders() {
        let rendered = render(&text_with_images(37), records(37), 15, 15);
        assert_eq!(rendered.html.matches("<img").count(), 15);
        let state = rendered.pagination.expect("paginated");
        assert_eq!(state.revealed_count(), 15);
        assert!(state.synthesized().is_empty());
        assert_eq!(
            state.control(),
            Some(LoadMoreLabel {
                next_batch: 15,
                remaining: 22
            })
        );
    }

    #[test]
    fn fewer_placeholders_than_batch_is_tolerated() {
        let rendered = render(&text_with_images(4), records(20), 15, 15);
        let state = rendered.pagination.expect("paginated");
        assert_eq!(state.revealed_count(), 4);
        assert_eq!(state.control().map(|l| l.remaining), Some(16));
    }

    #[test]
    fn second_begin_is_refused_while_in_flight() {
        let id = MessageId::new();
        let mut store = PaginationStore::new();
        store.insert(id.clone(), PaginationState::new(records(40), 15, 15));

        assert!(store.begin_reveal(&id));
        assert!(!store.begin_reveal(&id));

        let outcome = store.complete_reveal(&id).expect("batch appended");
        assert_eq!(outcome.appended, 15);
        assert!(!store.get(&id).unwrap().in_flight());
        assert!(store.begin_reveal(&id));
    }

    #[test]
    fn unknown_message_is_a_noop() {
        let mut store = PaginationStore::new();
        let id = MessageId::new();
        assert!(!store.begin_reveal(&id));
        assert!(store.complete_reveal(&id).is_none());
        assert!(store.reveal_next(&id).is_none());
    }

    #[test]
    fn complete_state_refuses_further_reveals() {
        let id = MessageId::new();
        let mut store = PaginationStore::new();
        store.insert(id.clone(), PaginationState::new(records(16), 15, 15));

        let outcome = store.reveal_next(&id).expect("last batch");
        assert_eq!(outcome.appended, 1);
        assert!(outcome.is_complete());

        let state = store.get(&id).unwrap();
        assert_eq!(state.phase(), RevealPhase::Complete);
        assert!(state.control().is_none());
        assert!(store.reveal_next(&id).is_none());
        assert_eq!(store.get(&id).unwrap().revealed_count(), 16);
    }

    #[test]
    fn label_formats_action_and_count() {
        let label = LoadMoreLabel {
            next_batch: 7,
            remaining: 7,
        };
        assert_eq!(label.action_text(), "7 Profil Daha Göster");
        assert_eq!(label.count_text(), "(7 kaldı)");
        assert_eq!(label.to_string(), "7 Profil Daha Göster (7 kaldı)");
    }

    #[test]
    fn new_clamps_inputs() {
        let state = PaginationState::new(records(3), 10, 0);
        assert_eq!(state.revealed_count(), 3);
        assert_eq!(state.batch_size(), 1);
        assert!(state.is_complete());
    }
}
