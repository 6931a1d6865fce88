//! Endpoint selection and widget constants.
//!
//! The backend base URLs are picked from the page hostname: a local page talks
//! to the development services on their fixed ports, anything else talks to
//! the hosted backend.

use std::sync::OnceLock;

/// Profiles revealed inline with an assistant message before the load-more
/// control takes over.
pub const INITIAL_BATCH_SIZE: usize = 15;
/// Profiles appended per load-more click.
pub const LOAD_MORE_BATCH_SIZE: usize = 15;
/// Simulated delay before a load-more batch appears.
pub const REVEAL_DELAY_MS: u32 = 300;
/// Time allowed for the DOM to settle before scrolling to new content.
pub const SCROLL_SETTLE_MS: u32 = 50;
/// Messages kept in the chat log; older ones are evicted.
pub const MAX_LOG_MESSAGES: usize = 200;
/// `top_k` used when the similarity count field is empty or invalid.
pub const DEFAULT_SIMILARITY_COUNT: u32 = 30;
/// Viewport width at or below which category groups start collapsed.
pub const MOBILE_BREAKPOINT_PX: f64 = 1024.0;

const HOSTED_BACKEND: &str = "https://beymetal-backend.onrender.com";

/// Base URLs for the backend services the widget talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Chat, catalog, connection systems and profile images
    pub catalog: String,
    /// Catalog search used for connection part details
    pub search: String,
    /// Similarity service
    pub similarity: String,
}

impl Endpoints {
    pub fn for_host(hostname: &str) -> Self {
        if is_local_host(hostname) {
            Self {
                catalog: "http://localhost:8002".to_string(),
                search: "http://localhost:8001".to_string(),
                similarity: "http://localhost:8004".to_string(),
            }
        } else {
            Self {
                catalog: HOSTED_BACKEND.to_string(),
                search: HOSTED_BACKEND.to_string(),
                similarity: HOSTED_BACKEND.to_string(),
            }
        }
    }

    pub fn profile_image_url(&self, code: &str) -> String {
        format!("{}/api/profile-image/{}", self.catalog, code)
    }
}

fn is_local_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1"
}

fn detect_endpoints() -> Endpoints {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    Endpoints::for_host(&hostname)
}

/// Computed at first use, fixed for the page lifetime
static ENDPOINTS_CACHE: OnceLock<Endpoints> = OnceLock::new();

pub fn endpoints() -> &'static Endpoints {
    ENDPOINTS_CACHE.get_or_init(detect_endpoints)
}

/// Image URL for a profile code on the active backend
pub fn profile_image_url(code: &str) -> String {
    endpoints().profile_image_url(code)
}

/// Grey "Görsel Yok" tile shown when a profile image fails to load
pub const MISSING_IMAGE_SRC: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 width=%22200%22 height=%22200%22%3E%3Crect fill=%22%23f0f0f0%22 width=%22200%22 height=%22200%22/%3E%3Ctext x=%2250%25%22 y=%2250%25%22 dominant-baseline=%22middle%22 text-anchor=%22middle%22 font-family=%22sans-serif%22 font-size=%2216%22 fill=%22%23999%22%3EG%C3%B6rsel Yok%3C/text%3E%3C/svg%3E";

/// `src` for a profile image, or the placeholder once loading has failed.
pub fn image_src(endpoints: &Endpoints, code: &str, failed: bool) -> String {
    if failed {
        MISSING_IMAGE_SRC.to_string()
    } else {
        endpoints.profile_image_url(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_uses_development_ports() {
        let endpoints = Endpoints::for_host("localhost");
        assert_eq!(endpoints.catalog, "http://localhost:8002");
        assert_eq!(endpoints.search, "http://localhost:8001");
        assert_eq!(endpoints.similarity, "http://localhost:8004");
        assert_eq!(Endpoints::for_host("127.0.0.1"), endpoints);
    }

    #[test]
    fn other_hosts_use_hosted_backend() {
        let endpoints = Endpoints::for_host("katalog.beymetal.com.tr");
        assert_eq!(endpoints.catalog, HOSTED_BACKEND);
        assert_eq!(endpoints.search, HOSTED_BACKEND);
        assert_eq!(endpoints.similarity, HOSTED_BACKEND);

        // An unresolved hostname is treated as production.
        assert_eq!(Endpoints::for_host("").catalog, HOSTED_BACKEND);
    }

    #[test]
    fn failed_image_falls_back_to_placeholder() {
        let endpoints = Endpoints::for_host("localhost");
        assert_eq!(
            image_src(&endpoints, "AP0002", false),
            "http://localhost:8002/api/profile-image/AP0002"
        );

        let fallback = image_src(&endpoints, "AP0002", true);
        assert_eq!(fallback, MISSING_IMAGE_SRC);
        assert!(fallback.starts_with("data:image/svg+xml,"));
        assert!(fallback.contains("G%C3%B6rsel Yok"));
    }

    #[test]
    fn image_url_is_built_from_catalog_base() {
        let endpoints = Endpoints::for_host("localhost");
        assert_eq!(
            endpoints.profile_image_url("AP0002"),
            "http://localhost:8002/api/profile-image/AP0002"
        );
    }
}
