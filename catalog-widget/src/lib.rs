pub mod api;
pub mod catalog;
pub mod chat_log;
pub mod components;
pub mod config;
pub mod interop;
pub mod markup;
pub mod pagination;

pub use api::ApiError;
pub use chat_log::{ChatLog, LogEntry};
pub use components::{CatalogShell, ChatBridge, ChatWidget};
pub use pagination::{
    render, LoadMoreLabel, PaginationSnapshot, PaginationState, PaginationStore, RenderedMessage,
    RevealOutcome, RevealPhase, RevealedProfile,
};
