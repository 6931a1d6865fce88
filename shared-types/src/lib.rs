//! Shared types between the catalog widget and the catalog backend
//!
//! The backend is an external service; these types mirror its JSON contract
//! and are deliberately lenient: every field other than a record's `code` is
//! optional and missing collections decode as empty.
//!
//! Serializable with serde for JSON over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Core Types
// ============================================================================

/// Unique identifier for a chat message in the visible log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new() -> Self {
        Self(format!("msg_{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Profile Records
// ============================================================================

/// Cross-section measurements in millimetres
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct Dimensions {
    #[serde(rename = "A", default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(rename = "B", default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(rename = "K", default, skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
}

/// A catalog profile as returned by chat, category, search and similarity
/// endpoints. Only `code` is guaranteed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct ProfileRecord {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mold_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}

impl ProfileRecord {
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Chat
// ============================================================================

/// One turn of the conversation history, in the backend's chat format.
/// The widget never interprets it; it round-trips whatever the backend sends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct HistoryTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct ChatRequest {
    pub message: String,
    /// `None` when the conversation is fresh
    pub conversation_history: Option<Vec<HistoryTurn>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct ChatResponse {
    pub message: String,
    #[serde(default)]
    pub profile_data: Option<Vec<ProfileRecord>>,
    #[serde(default)]
    pub conversation_history: Option<Vec<HistoryTurn>>,
}

/// Chat message for UI display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub enum Sender {
    User,
    Assistant,
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct CategoryGroups {
    #[serde(default)]
    pub standard: Vec<String>,
    #[serde(default)]
    pub shape: Vec<String>,
    #[serde(default)]
    pub sector: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: CategoryGroups,
    #[serde(default)]
    #[ts(type = "unknown")]
    pub stats: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct CategoryProfilesResponse {
    #[serde(default)]
    pub profiles: Vec<ProfileRecord>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct CatalogSearchResponse {
    #[serde(default)]
    pub results: Vec<ProfileRecord>,
}

/// Manufacturer whose catalog the category browser can be narrowed to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub enum Company {
    Linearossa,
    Beymetal,
    Alfore,
}

impl Company {
    pub const ALL: [Company; 3] = [Company::Linearossa, Company::Beymetal, Company::Alfore];

    pub fn as_str(&self) -> &'static str {
        match self {
            Company::Linearossa => "linearossa",
            Company::Beymetal => "beymetal",
            Company::Alfore => "alfore",
        }
    }
}

// ============================================================================
// Connection Systems
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct ConnectionProfile {
    pub connection_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inner_profile: Option<String>,
    #[serde(default)]
    pub middle_profile: Option<String>,
    #[serde(default)]
    pub outer_profile: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct ConnectionSystem {
    pub name: String,
    #[serde(default)]
    pub profiles: Vec<ConnectionProfile>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct ConnectionSystemsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<ConnectionSystem>,
}

// ============================================================================
// Similarity
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct SimilarityHit {
    pub profile_code: String,
    pub similarity_score: f64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../../catalog-widget/bindings/wire.ts")]
pub struct SimilarityResponse {
    #[serde(default)]
    pub results: Vec<SimilarityHit>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    #[test]
    fn test_message_id_generation() {
        let id1 = MessageId::new();
        let id2 = MessageId::new();
        assert_ne!(id1, id2);
        assert!(id1.as_str().starts_with("msg_"));
        assert_eq!(id1.as_str().len(), 4 + 32);
    }

    #[test]
    fn test_profile_record_with_only_code() {
        let record: ProfileRecord = serde_json::from_str(r#"{"code":"AP0002"}"#).unwrap();
        assert_eq!(record, ProfileRecord::with_code("AP0002"));
        assert!(record.dimensions.is_none());
    }

    #[test]
    fn test_profile_record_full_shape() {
        let json = r#"{
            "code": "LR-3101-1",
            "category": "KUTU",
            "categories": ["KUTU", "STANDART"],
            "customer": "ACME",
            "mold_status": "Mevcut",
            "description": "kare kutu",
            "dimensions": {"A": 100.0, "B": 50.0, "K": 2.0, "Ø": 28.0},
            "similarity_score": 0.91
        }"#;
        let record: ProfileRecord = serde_json::from_str(json).unwrap();
        let dims = record.dimensions.unwrap();
        assert_eq!(dims.a, Some(100.0));
        assert_eq!(dims.k, Some(2.0));
        assert_eq!(record.categories.unwrap().len(), 2);
        assert_eq!(record.similarity_score, Some(0.91));
    }

    #[test]
    fn test_chat_response_without_profiles() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"message":"Merhaba","profile_data":null}"#).unwrap();
        assert!(response.profile_data.is_none());
        assert!(response.conversation_history.is_none());
    }

    #[test]
    fn test_chat_request_fresh_history_is_null() {
        let request = ChatRequest {
            message: "100 kutu".to_string(),
            conversation_history: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["conversation_history"], serde_json::Value::Null);
    }

    #[test]
    fn test_company_serialization() {
        let json = serde_json::to_string(&Company::Linearossa).unwrap();
        assert_eq!(json, "\"linearossa\"");
        assert_eq!(Company::Alfore.as_str(), "alfore");
    }

    #[test]
    fn test_connection_systems_missing_parts() {
        let json = r#"{"success": true, "data": [
            {"name": "Sürme", "profiles": [{"connection_code": "GL-100"}]}
        ]}"#;
        let response: ConnectionSystemsResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        let profile = &response.data[0].profiles[0];
        assert!(profile.inner_profile.is_none());
        assert_eq!(profile.name, "");
    }

    #[test]
    fn test_similarity_error_body() {
        let response: SimilarityResponse =
            serde_json::from_str(r#"{"error":"profile not indexed"}"#).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.error.as_deref(), Some("profile not indexed"));
    }

    #[test]
    fn export_types() {
        // Export all wire types to TypeScript
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        MessageId::export(&config).unwrap();
        Dimensions::export(&config).unwrap();
        ProfileRecord::export(&config).unwrap();
        HistoryTurn::export(&config).unwrap();
        ChatRequest::export(&config).unwrap();
        ChatResponse::export(&config).unwrap();
        ChatMessage::export(&config).unwrap();
        Sender::export(&config).unwrap();
        CategoryGroups::export(&config).unwrap();
        CategoriesResponse::export(&config).unwrap();
        CategoryProfilesResponse::export(&config).unwrap();
        CatalogSearchResponse::export(&config).unwrap();
        Company::export(&config).unwrap();
        ConnectionProfile::export(&config).unwrap();
        ConnectionSystem::export(&config).unwrap();
        ConnectionSystemsResponse::export(&config).unwrap();
        SimilarityHit::export(&config).unwrap();
        SimilarityResponse::export(&config).unwrap();
    }
}
