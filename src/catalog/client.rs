//! Catalog endpoint client.
//!
//! The plugin host cannot block on HTTP, so a fetch is split in two halves:
//! [`CatalogClient::request`] describes the GET to issue (the shim hands it to
//! Zellij's `web_request`), and [`CatalogClient::decode`] turns the host's
//! `WebRequestResult` into wine records. The request identity travels through
//! the host in the context map and comes back with the result.

use crate::domain::{CatalogError, Category, WineItem};
use std::collections::BTreeMap;

/// Default catalog base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.sampleapis.com/wines";

/// Context key marking a web request as a catalog fetch.
const CONTEXT_SOURCE_KEY: &str = "source";
const CONTEXT_SOURCE_VALUE: &str = "sommelier-catalog";
const CONTEXT_CATEGORY_KEY: &str = "category";
const CONTEXT_GENERATION_KEY: &str = "generation";

/// Identity of one issued catalog request.
///
/// Produced by the load controller each time it enters `Loading`. Only the
/// ticket with the current generation may change visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub category: Category,
    pub generation: u64,
}

/// A fully described catalog GET, ready for the host to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Absolute URL, `<base_url>/<category id>`.
    pub url: String,
    /// Opaque context echoed back by the host with the result.
    pub context: BTreeMap<String, String>,
}

/// Builds catalog requests and decodes their responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogClient {
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogClient {
    /// Creates a client for the given base URL (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the endpoint URL for a raw category id.
    ///
    /// The id is passed through unchanged; unknown ids are the endpoint's
    /// problem, not ours.
    ///
    /// # Examples
    ///
    /// ```
    /// use sommelier::catalog::CatalogClient;
    ///
    /// let client = CatalogClient::new("https://api.sampleapis.com/wines/");
    /// assert_eq!(client.url_for("port"), "https://api.sampleapis.com/wines/port");
    /// ```
    #[must_use]
    pub fn url_for(&self, category_id: &str) -> String {
        format!("{}/{category_id}", self.base_url)
    }

    /// Describes the GET for a ticket, carrying its identity in the context.
    #[must_use]
    pub fn request(&self, ticket: FetchTicket) -> CatalogRequest {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_SOURCE_KEY.to_string(), CONTEXT_SOURCE_VALUE.to_string());
        context.insert(CONTEXT_CATEGORY_KEY.to_string(), ticket.category.id().to_string());
        context.insert(CONTEXT_GENERATION_KEY.to_string(), ticket.generation.to_string());

        let url = self.url_for(ticket.category.id());
        tracing::debug!(url = %url, generation = ticket.generation, "catalog request built");

        CatalogRequest { url, context }
    }

    /// Decodes a host response into wine records.
    ///
    /// Items are returned in endpoint order.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Network`] if `status` is outside `200..=299`
    /// - [`CatalogError::Parse`] if the body is not a JSON array of wine records
    pub fn decode(status: u16, body: &[u8]) -> Result<Vec<WineItem>, CatalogError> {
        if !(200..=299).contains(&status) {
            return Err(CatalogError::Network { status });
        }

        let items: Vec<WineItem> =
            serde_json::from_slice(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::debug!(item_count = items.len(), "catalog response decoded");
        Ok(items)
    }
}

/// Recovers the request identity from a web request context.
///
/// Returns `None` for requests that are not catalog fetches or whose context
/// was mangled.
#[must_use]
pub fn ticket_from_context(context: &BTreeMap<String, String>) -> Option<FetchTicket> {
    if context.get(CONTEXT_SOURCE_KEY).map(String::as_str) != Some(CONTEXT_SOURCE_VALUE) {
        return None;
    }

    let category = context
        .get(CONTEXT_CATEGORY_KEY)
        .and_then(|id| Category::from_id(id))?;
    let generation = context
        .get(CONTEXT_GENERATION_KEY)
        .and_then(|g| g.parse::<u64>().ok())?;

    Some(FetchTicket { category, generation })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[
        {"id": 1, "wine": "Gran Reserva", "winery": "Bodega", "rating": {"average": "4.5", "reviews": "10"}, "location": "Spain", "image": "https://img/1"},
        {"id": 2, "wine": "Malbec", "winery": "Finca", "rating": {"average": "3.0", "reviews": "200"}, "location": "Argentina", "image": "https://img/2"}
    ]"#;

    #[test]
    fn request_round_trips_ticket_through_context() {
        let client = CatalogClient::default();
        let ticket = FetchTicket {
            category: Category::Sparkling,
            generation: 42,
        };

        let request = client.request(ticket);

        assert_eq!(request.url, "https://api.sampleapis.com/wines/sparkling");
        assert_eq!(ticket_from_context(&request.context), Some(ticket));
    }

    #[test]
    fn foreign_context_is_not_a_ticket() {
        let mut context = BTreeMap::new();
        context.insert("category".to_string(), "reds".to_string());
        context.insert("generation".to_string(), "1".to_string());
        assert_eq!(ticket_from_context(&context), None);

        context.insert("source".to_string(), "sommelier-catalog".to_string());
        context.insert("generation".to_string(), "one".to_string());
        assert_eq!(ticket_from_context(&context), None);
    }

    #[test]
    fn decode_keeps_endpoint_order() {
        let items = CatalogClient::decode(200, BODY.as_bytes()).unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn decode_rejects_non_success_status() {
        assert_eq!(
            CatalogClient::decode(404, BODY.as_bytes()),
            Err(CatalogError::Network { status: 404 })
        );
        assert_eq!(
            CatalogClient::decode(199, b"[]"),
            Err(CatalogError::Network { status: 199 })
        );
    }

    #[test]
    fn decode_rejects_malformed_body() {
        assert!(matches!(
            CatalogClient::decode(200, b"<html>oops</html>"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            CatalogClient::decode(200, br#"{"error": "not an array"}"#),
            Err(CatalogError::Parse(_))
        ));
    }
}
