use std::collections::VecDeque;

use chrono::Utc;
use shared_types::{ChatMessage, HistoryTurn, MessageId, ProfileRecord, Sender};

use crate::config::{INITIAL_BATCH_SIZE, LOAD_MORE_BATCH_SIZE};
use crate::markup::format_message;
use crate::pagination::{render, PaginationStore};

pub const WELCOME_TEXT: &str = "Merhaba! Ben ALUNA, Beymetal'in alüminyum profil asistanıyım.\n\
Standart profilleri ölçü, kategori ve kalınlık bilgilerine göre arayabilirsiniz.\n\n\
**Örnek aramalar:**\n\
• \"100 kutu\" - A veya B ölçüsü 100mm olan kutular\n\
• \"çap 28\" - Çapı 28mm olan borular\n\
• \"30x30 lama\" - 30x30mm lamalar\n\
• \"kalınlığı 2mm olan kutu\" - 2mm et kalınlığındaki kutular";

pub const CONNECTION_APOLOGY: &str =
    "Üzgünüm, sunucuya bağlanılamadı. Lütfen backend'in çalıştığından emin olun.";

/// A message in the visible log together with its rendered body
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub message: ChatMessage,
    pub html: String,
}

/// The visible chat log.
///
/// Owns the pagination state of every message it shows: when a message
/// leaves the log, its state goes with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLog {
    entries: VecDeque<LogEntry>,
    history: Vec<HistoryTurn>,
    pagination: PaginationStore,
    capacity: usize,
}

impl ChatLog {
    /// A fresh log holding only the welcome message.
    pub fn new(capacity: usize) -> Self {
        let mut log = Self {
            entries: VecDeque::new(),
            history: Vec::new(),
            pagination: PaginationStore::new(),
            capacity: capacity.max(1),
        };
        log.push_assistant(WELCOME_TEXT, Vec::new());
        log
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pagination(&self) -> &PaginationStore {
        &self.pagination
    }

    pub fn pagination_mut(&mut self) -> &mut PaginationStore {
        &mut self.pagination
    }

    /// History to send with the next request; `None` for a fresh conversation.
    pub fn history_for_request(&self) -> Option<Vec<HistoryTurn>> {
        (!self.history.is_empty()).then(|| self.history.clone())
    }

    /// The backend is authoritative for history; its copy replaces ours.
    pub fn replace_history(&mut self, history: Vec<HistoryTurn>) {
        self.history = history;
    }

    pub fn push_user(&mut self, text: &str) -> MessageId {
        let html = format_message(text).html;
        self.push_entry(Sender::User, text, html)
    }

    pub fn push_assistant(&mut self, text: &str, profiles: Vec<ProfileRecord>) -> MessageId {
        let rendered = render(text, profiles, INITIAL_BATCH_SIZE, LOAD_MORE_BATCH_SIZE);
        let id = self.push_entry(Sender::Assistant, text, rendered.html);
        if let Some(state) = rendered.pagination {
            self.pagination.insert(id.clone(), state);
        }
        id
    }

    pub fn push_apology(&mut self) -> MessageId {
        self.push_assistant(CONNECTION_APOLOGY, Vec::new())
    }

    /// Clear messages, history and pagination; the welcome message returns.
    pub fn reset(&mut self) {
        *self = Self::new(self.capacity);
    }

    fn push_entry(&mut self, sender: Sender, text: &str, html: String) -> MessageId {
        let id = MessageId::new();
        self.entries.push_back(LogEntry {
            message: ChatMessage {
                id: id.clone(),
                text: text.to_string(),
                sender,
                timestamp: Utc::now(),
            },
            html,
        });
        self.evict_overflow();
        id
    }

    fn evict_overflow(&mut self) {
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                self.pagination.remove(&evicted.message.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<ProfileRecord> {
        (1..=count)
            .map(|n| ProfileRecord::with_code(format!("KT{n:03}")))
            .collect()
    }

    #[test]
    fn new_log_starts_with_welcome() {
        let log = ChatLog::new(10);
        assert_eq!(log.len(), 1);
        let welcome = log.entries().next().unwrap();
        assert_eq!(welcome.message.sender, Sender::Assistant);
        assert!(welcome.html.contains("<strong>Örnek aramalar:</strong>"));
        assert!(log.history_for_request().is_none());
    }

    #[test]
    fn long_profile_list_registers_pagination() {
        let mut log = ChatLog::new(10);
        let short = log.push_assistant("az sonuç", records(3));
        let long = log.push_assistant("çok sonuç", records(40));

        assert!(log.pagination().get(&short).is_none());
        let state = log.pagination().get(&long).expect("paginated");
        assert_eq!(state.items().len(), 40);
        assert_eq!(state.revealed_count(), 0);
    }

    #[test]
    fn eviction_drops_pagination_state() {
        let mut log = ChatLog::new(3);
        let paginated = log.push_assistant("çok sonuç", records(20));
        assert_eq!(log.pagination().len(), 1);

        log.push_user("100 kutu");
        log.push_user("çap 28");
        assert_eq!(log.len(), 3);
        assert!(log.pagination().get(&paginated).is_some());

        log.push_user("30x30 lama");
        assert_eq!(log.len(), 3);
        assert!(log.pagination().is_empty());
        assert!(log.entries().all(|e| e.message.id != paginated));
    }

    #[test]
    fn reveal_after_eviction_is_a_noop() {
        let mut log = ChatLog::new(2);
        let paginated = log.push_assistant("çok sonuç", records(20));
        assert!(log.pagination_mut().begin_reveal(&paginated));

        log.push_user("a");
        log.push_user("b");
        assert!(log.pagination_mut().complete_reveal(&paginated).is_none());
    }

    #[test]
    fn reset_clears_history_and_pagination() {
        let mut log = ChatLog::new(10);
        log.push_user("100 kutu");
        log.push_assistant("çok sonuç", records(20));
        log.replace_history(vec![HistoryTurn {
            role: "user".to_string(),
            content: "100 kutu".to_string(),
        }]);
        assert!(log.history_for_request().is_some());

        log.reset();
        assert_eq!(log.len(), 1);
        assert!(log.pagination().is_empty());
        assert!(log.history_for_request().is_none());
    }

    #[test]
    fn apology_has_no_profiles() {
        let mut log = ChatLog::new(10);
        let id = log.push_apology();
        assert!(log.pagination().get(&id).is_none());
        let entry = log.entries().last().unwrap();
        assert_eq!(entry.message.text, CONNECTION_APOLOGY);
    }
}
