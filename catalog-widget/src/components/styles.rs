//! Inline style blocks for the widget. Class names are shared with the
//! markup produced in `crate::markup`.

pub const CHAT_STYLES: &str = r#"
/* Widget shell */
.chat-widget {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    z-index: 1000;
    font-family: system-ui, -apple-system, sans-serif;
}

.chat-minimized {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.25rem;
    border: none;
    border-radius: 9999px;
    background: var(--accent-bg, #1e3a5f);
    color: #fff;
    font-weight: 600;
    cursor: pointer;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
}

.chat-launcher-icon {
    font-size: 1.25rem;
}

.chat-expanded {
    display: flex;
    flex-direction: column;
    width: 420px;
    height: 640px;
    max-height: calc(100vh - 3rem);
    background: #fff;
    border-radius: 16px;
    overflow: hidden;
    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.25);
}

@media (max-width: 1024px) {
    .chat-widget.expanded {
        inset: 0;
    }

    .chat-expanded {
        width: 100vw;
        height: 100vh;
        max-height: 100vh;
        border-radius: 0;
    }
}

/* Header */
.chat-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    background: var(--accent-bg, #1e3a5f);
    color: #fff;
    flex-shrink: 0;
}

.chat-title {
    display: flex;
    flex-direction: column;
}

.chat-name {
    font-weight: 700;
    letter-spacing: 0.05em;
}

.chat-subtitle {
    font-size: 0.75rem;
    opacity: 0.8;
}

.chat-header-actions {
    display: flex;
    gap: 0.25rem;
}

.chat-header-button {
    width: 2rem;
    height: 2rem;
    border: none;
    border-radius: 8px;
    background: transparent;
    color: inherit;
    cursor: pointer;
}

.chat-header-button:hover {
    background: rgba(255, 255, 255, 0.15);
}

/* Messages */
.chat-messages {
    flex: 1;
    overflow-y: auto;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    background: #f5f7fa;
}

.message {
    display: flex;
    max-width: 100%;
}

.message.user {
    justify-content: flex-end;
}

.message-content {
    max-width: 85%;
    padding: 0.75rem 1rem;
    border-radius: 12px;
    line-height: 1.5;
    font-size: 0.9rem;
    overflow-wrap: anywhere;
}

.message.user .message-content {
    background: var(--accent-bg, #1e3a5f);
    color: #fff;
    border-bottom-right-radius: 4px;
}

.message.assistant .message-content {
    background: #fff;
    color: #1f2937;
    border-bottom-left-radius: 4px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.chat-profile-image {
    display: block;
    max-width: 100%;
    max-height: 180px;
    margin: 0.5rem 0;
    border-radius: 8px;
    background: #fff;
    object-fit: contain;
}

.revealed-profile {
    margin-top: 0.75rem;
}

.revealed-profile-field {
    font-size: 0.85rem;
    color: #4b5563;
}

/* Load more */
.load-more-button {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.4rem;
    width: 100%;
    margin-top: 0.75rem;
    padding: 0.6rem 1rem;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
    background: #f8fafc;
    color: #1e3a5f;
    font-weight: 600;
    cursor: pointer;
}

.load-more-button:disabled {
    cursor: wait;
    opacity: 0.7;
}

.load-more-count {
    font-weight: 400;
    color: #64748b;
}

/* Typing */
.typing-indicator {
    display: flex;
    gap: 4px;
    padding: 0.75rem 1rem;
    background: #fff;
    border-radius: 12px;
}

.typing-dot {
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: #94a3b8;
    animation: typing-bounce 1.2s infinite ease-in-out;
}

.typing-dot:nth-child(2) {
    animation-delay: 0.15s;
}

.typing-dot:nth-child(3) {
    animation-delay: 0.3s;
}

@keyframes typing-bounce {
    0%, 80%, 100% { transform: translateY(0); }
    40% { transform: translateY(-4px); }
}

/* Input */
.chat-input-area {
    display: flex;
    gap: 0.5rem;
    padding: 0.75rem;
    border-top: 1px solid #e2e8f0;
    background: #fff;
}

.chat-input {
    flex: 1;
    padding: 0.6rem 0.9rem;
    border: 1px solid #cbd5e1;
    border-radius: 9999px;
    font-size: 0.9rem;
    outline: none;
}

.chat-input:focus {
    border-color: #1e3a5f;
}

.send-button {
    width: 2.5rem;
    height: 2.5rem;
    border: none;
    border-radius: 50%;
    background: var(--accent-bg, #1e3a5f);
    color: #fff;
    cursor: pointer;
}

.send-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
"#;

pub const CATALOG_STYLES: &str = r#"
.catalog-page {
    min-height: 100vh;
    background: #f5f7fa;
    color: #1f2937;
    font-family: system-ui, -apple-system, sans-serif;
}

/* Header */
.catalog-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1rem 2rem;
    background: #fff;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.company-logos {
    display: flex;
    gap: 0.75rem;
}

.company-logo {
    padding: 0.4rem 0.9rem;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
    background: #fff;
    font-weight: 600;
    text-transform: uppercase;
    cursor: pointer;
    opacity: 0.45;
}

.company-logo.active {
    opacity: 1;
    border-color: #1e3a5f;
}

.header-actions {
    display: flex;
    gap: 0.5rem;
}

.header-button {
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 8px;
    background: #1e3a5f;
    color: #fff;
    cursor: pointer;
}

.systems-toggle {
    display: none;
}

@media (max-width: 1024px) {
    .systems-toggle {
        display: inline-block;
    }

    .connection-sidebar {
        display: none;
    }
}

/* Layout */
.catalog-body {
    display: flex;
    gap: 1.5rem;
    padding: 1.5rem 2rem;
}

.catalog-main {
    flex: 1;
    min-width: 0;
}

/* Category groups */
.category-group {
    margin-bottom: 1rem;
    background: #fff;
    border-radius: 12px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.category-group-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    width: 100%;
    padding: 0.9rem 1.2rem;
    border: none;
    background: transparent;
    font-weight: 700;
    cursor: pointer;
}

.category-group-body {
    padding: 0 1.2rem 1rem;
}

.category-search {
    width: 100%;
    margin-bottom: 0.75rem;
    padding: 0.5rem 0.75rem;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
}

.category-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.category-chip {
    padding: 0.4rem 0.8rem;
    border: 1px solid #e2e8f0;
    border-radius: 9999px;
    background: #f8fafc;
    cursor: pointer;
}

.category-chip:hover {
    background: #e2e8f0;
}

.no-results,
.loading-text,
.error-text {
    padding: 1rem;
    color: #64748b;
    text-align: center;
}

.error-text {
    color: #b91c1c;
}

/* Profile grid */
.profile-view-header {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}

.back-button {
    padding: 0.4rem 0.9rem;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
    background: #fff;
    cursor: pointer;
}

.profile-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 1rem;
}

.profile-card {
    position: relative;
    padding: 1rem;
    background: #fff;
    border-radius: 12px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
    cursor: pointer;
}

.profile-card-image {
    width: 100%;
    height: 160px;
    object-fit: contain;
    cursor: zoom-in;
    transition: transform 0.2s ease;
}

.profile-card-image.zoomed {
    transform: scale(1.8);
    cursor: zoom-out;
    position: relative;
    z-index: 5;
}

.profile-code {
    margin-top: 0.5rem;
    font-weight: 700;
}

.profile-meta {
    font-size: 0.85rem;
    color: #4b5563;
}

.mold-status {
    margin-top: 0.4rem;
    font-size: 0.8rem;
    color: #b45309;
}

.mold-status.available {
    color: #15803d;
}

.similarity-badge {
    position: absolute;
    top: 0.5rem;
    right: 0.5rem;
    padding: 0.2rem 0.5rem;
    border-radius: 9999px;
    color: #fff;
    font-size: 0.75rem;
    font-weight: 700;
}

.similarity-badge.similarity-high {
    background: #15803d;
}

.similarity-badge.similarity-medium {
    background: #ca8a04;
}

.similarity-badge.similarity-low {
    background: #b91c1c;
}

/* Connection sidebar */
.connection-sidebar {
    width: 280px;
    flex-shrink: 0;
    padding: 1rem;
    background: #fff;
    border-radius: 12px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
    align-self: flex-start;
}

.sidebar-title {
    margin: 0 0 0.75rem;
    font-size: 1rem;
}

.system-item {
    display: block;
    width: 100%;
    margin-bottom: 0.4rem;
    padding: 0.5rem 0.75rem;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    background: #f8fafc;
    text-align: left;
    cursor: pointer;
}

.system-profile {
    margin-bottom: 1rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid #e2e8f0;
}

.system-part {
    display: flex;
    gap: 0.75rem;
    margin-top: 0.5rem;
}

.system-part-image {
    width: 96px;
    height: 96px;
    object-fit: contain;
    background: #f8fafc;
    border-radius: 8px;
}

.system-part-label {
    font-size: 0.75rem;
    color: #64748b;
}

/* Modals */
.modal-overlay {
    position: fixed;
    inset: 0;
    z-index: 900;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(15, 23, 42, 0.55);
}

.modal {
    width: min(900px, 94vw);
    max-height: 88vh;
    overflow-y: auto;
    padding: 1.5rem;
    background: #fff;
    border-radius: 16px;
}

.modal-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.modal-close {
    border: none;
    background: transparent;
    font-size: 1.25rem;
    cursor: pointer;
}

.similarity-form {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 1rem;
}

.similarity-form input {
    padding: 0.5rem 0.75rem;
    border: 1px solid #cbd5e1;
    border-radius: 8px;
}

.similarity-code-input {
    flex: 1;
}

.similarity-count-input {
    width: 80px;
}

.validation-text {
    color: #b91c1c;
    font-size: 0.85rem;
}

.query-card {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
    padding: 1rem;
    background: #f1f5f9;
    border-radius: 12px;
}

.query-card img {
    width: 120px;
    height: 120px;
    object-fit: contain;
}
"#;
