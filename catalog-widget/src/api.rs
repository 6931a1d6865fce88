use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    CatalogSearchResponse, CategoriesResponse, CategoryProfilesResponse, ChatRequest,
    ChatResponse, ConnectionSystem, ConnectionSystemsResponse, HistoryTurn, ProfileRecord,
    SimilarityHit, SimilarityResponse,
};

use crate::config::endpoints;

/// Errors from calls to the catalog backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse JSON: {0}")]
    Decode(String),

    /// The backend answered but reported a failure in the body
    #[error("{0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

fn encode_component(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    decode(response).await
}

// ============================================================================
// Chat
// ============================================================================

pub async fn send_chat_message(
    message: &str,
    conversation_history: Option<Vec<HistoryTurn>>,
) -> Result<ChatResponse> {
    let url = format!("{}/api/chat", endpoints().catalog);

    let request = ChatRequest {
        message: message.to_string(),
        conversation_history,
    };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| ApiError::Request(format!("failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    decode(response).await
}

// ============================================================================
// Catalog
// ============================================================================

/// `companies` is the comma-separated filter value, if any.
pub async fn fetch_categories(companies: Option<&str>) -> Result<CategoriesResponse> {
    let mut url = format!("{}/api/catalog/categories", endpoints().catalog);
    if let Some(companies) = companies {
        url.push_str("?companies=");
        url.push_str(&encode_component(companies));
    }
    get_json(&url).await
}

pub async fn fetch_category_profiles(category: &str) -> Result<Vec<ProfileRecord>> {
    let url = format!(
        "{}/api/catalog/category/{}",
        endpoints().catalog,
        encode_component(category)
    );
    let data: CategoryProfilesResponse = get_json(&url).await?;
    Ok(data.profiles)
}

pub async fn search_catalog(query: &str) -> Result<Vec<ProfileRecord>> {
    let url = format!(
        "{}/api/catalog/search?q={}",
        endpoints().search,
        encode_component(query)
    );
    let data: CatalogSearchResponse = get_json(&url).await?;
    Ok(data.results)
}

// ============================================================================
// Connection systems
// ============================================================================

pub async fn fetch_connection_systems() -> Result<Vec<ConnectionSystem>> {
    let url = format!("{}/api/connections/systems", endpoints().catalog);
    let data: ConnectionSystemsResponse = get_json(&url).await?;

    if !data.success {
        return Err(ApiError::Backend("Sistemler yüklenemedi".to_string()));
    }

    Ok(data.data)
}

// ============================================================================
// Similarity
// ============================================================================

pub async fn fetch_similar_profiles(code: &str, top_k: u32) -> Result<Vec<SimilarityHit>> {
    let url = format!(
        "{}/api/similarity/{}?top_k={}",
        endpoints().similarity,
        encode_component(code),
        top_k
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let status = response.status();
    let ok = response.ok();

    // Error bodies carry a message worth showing, so decode before checking
    // the status.
    let data: Result<SimilarityResponse> = decode(response).await;
    match data {
        Ok(SimilarityResponse {
            error: Some(error), ..
        }) => Err(ApiError::Backend(error)),
        Ok(data) if ok => Ok(data.results),
        Ok(_) => Err(ApiError::Status(status)),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(e),
    }
}
