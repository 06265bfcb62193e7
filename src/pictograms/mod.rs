//! ARASAAC pictogram lookup.
//!
//! One remote search per keyword, issued sequentially and guarded by the
//! client's request timeout. Keywords that fail or match nothing are skipped
//! without surfacing an error; the result list only shrinks. All ARASAAC
//! wire types are private to this module.

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::PictogramsConfig;
use crate::error::AppError;

// ── Public record ─────────────────────────────────────────────────────────────

/// One resolved pictogram, shaped for the HTTP response.
#[derive(Debug, Clone, Serialize)]
pub struct PictogramRecord {
    /// Search term that produced this record.
    pub keyword: String,
    /// Remote identifier; opaque, integer or null on the wire.
    pub id: Option<i64>,
    /// Image-fetch URL embedding the identifier.
    pub url: String,
    /// Display label: the remote's canonical keyword, else the search term.
    pub text: String,
}

// ── Service ───────────────────────────────────────────────────────────────────

/// Resolves keywords against the ARASAAC search API.
///
/// Constructed once at startup, then cheaply cloned because
/// `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct PictogramService {
    client: Client,
    api_base: String,
}

#[derive(Debug, Error)]
enum LookupError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unusable response: {0}")]
    Decode(String),
}

impl PictogramService {
    /// Build the service from config. The timeout applies per request.
    pub fn from_config(config: &PictogramsConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build pictogram HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve `keywords` in order, one search each, skipping failures and
    /// misses. The output preserves input order and never exceeds the input
    /// length.
    pub async fn fetch_pictograms(&self, keywords: &[String], locale: &str) -> Vec<PictogramRecord> {
        let mut records = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            match self.lookup(locale, keyword).await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => debug!(%keyword, "no pictogram match"),
                Err(e) => warn!(%keyword, error = %e, "pictogram lookup failed; skipping"),
            }
        }
        records
    }

    /// Fetch one pictogram's full remote record. Returns an empty JSON
    /// object on any failure instead of an error.
    pub async fn get_pictogram_by_id(&self, id: i64, locale: &str) -> serde_json::Value {
        match self.fetch_by_id(id, locale).await {
            Ok(value) => value,
            Err(e) => {
                warn!(id, error = %e, "pictogram fetch by id failed; returning empty record");
                serde_json::json!({})
            }
        }
    }

    /// Search one keyword and shape the first hit, if any, into a record.
    async fn lookup(
        &self,
        locale: &str,
        keyword: &str,
    ) -> Result<Option<PictogramRecord>, LookupError> {
        let hits = self.search(locale, keyword).await?;
        let Some(first) = hits.into_iter().next() else {
            return Ok(None);
        };

        // A hit without its identifier cannot yield a usable image URL.
        let Some(id) = first.id else {
            return Err(LookupError::Decode("search hit missing _id".into()));
        };

        let text = first
            .keywords
            .first()
            .and_then(|entry| entry.keyword.clone())
            .unwrap_or_else(|| keyword.to_string());

        Ok(Some(PictogramRecord {
            keyword: keyword.to_string(),
            id: Some(id),
            url: format!("{}/pictograms/{id}", self.api_base),
            text,
        }))
    }

    async fn search(&self, locale: &str, keyword: &str) -> Result<Vec<SearchHit>, LookupError> {
        let url = self.endpoint(&["pictograms", locale, "search", keyword])?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let status = response.status();
        // ARASAAC signals "no matches" with 404, not an empty array.
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(LookupError::Request(format!("search returned HTTP {status}")));
        }

        response
            .json::<Vec<SearchHit>>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }

    async fn fetch_by_id(&self, id: i64, locale: &str) -> Result<serde_json::Value, LookupError> {
        let url = self.endpoint(&["pictograms", locale, &id.to_string()])?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Request(format!("fetch returned HTTP {status}")));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }

    /// Build an API URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| LookupError::Request(format!("invalid API base '{}': {e}", self.api_base)))?;
        url.path_segments_mut()
            .map_err(|_| {
                LookupError::Request(format!("API base '{}' cannot carry paths", self.api_base))
            })?
            .extend(segments);
        Ok(url)
    }
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_id", default)]
    id: Option<i64>,
    #[serde(default)]
    keywords: Vec<LocalizedKeyword>,
}

#[derive(Debug, Deserialize)]
struct LocalizedKeyword {
    #[serde(default)]
    keyword: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn search_stub(Path((_locale, keyword)): Path<(String, String)>) -> axum::response::Response {
        match keyword.as_str() {
            "cat" => Json(json!([
                {"_id": 2371, "keywords": [{"keyword": "kitty"}, {"keyword": "cat"}]},
                {"_id": 9999, "keywords": [{"keyword": "second hit, ignored"}]}
            ]))
            .into_response(),
            "dog" => Json(json!([{"_id": 2372, "keywords": []}])).into_response(),
            "sun" => Json(json!([{"_id": 2373}])).into_response(),
            "ice cream" => Json(json!([{"_id": 11, "keywords": []}])).into_response(),
            "anonymous" => Json(json!([{"keywords": [{"keyword": "x"}]}])).into_response(),
            "empty" => Json(json!([])).into_response(),
            "boom" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            "junk" => "not json".into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn by_id_stub(Path((_locale, id)): Path<(String, i64)>) -> axum::response::Response {
        if id == 2371 {
            Json(json!({"_id": 2371, "keywords": [{"keyword": "cat"}], "tags": ["animal"]}))
                .into_response()
        } else {
            StatusCode::NOT_FOUND.into_response()
        }
    }

    fn stub_router() -> Router {
        Router::new()
            .route("/pictograms/{locale}/search/{keyword}", get(search_stub))
            .route("/pictograms/{locale}/{id}", get(by_id_stub))
    }

    async fn serve_stub(prefix: Option<&str>) -> String {
        let router = match prefix {
            Some(p) => Router::new().nest(p, stub_router()),
            None => stub_router(),
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        match prefix {
            Some(p) => format!("http://{addr}{p}"),
            None => format!("http://{addr}"),
        }
    }

    fn service(api_base: String) -> PictogramService {
        PictogramService::from_config(&PictogramsConfig {
            api_base_url: api_base,
            timeout_seconds: 2,
        })
        .unwrap()
    }

    fn owned(keywords: &[&str]) -> Vec<String> {
        keywords.iter().map(|k| k.to_string()).collect()
    }

    #[tokio::test]
    async fn resolves_keywords_in_order_with_ids_in_urls() {
        let svc = service(serve_stub(None).await);
        let records = svc.fetch_pictograms(&owned(&["cat", "dog"]), "en").await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].keyword, "cat");
        assert_eq!(records[0].id, Some(2371));
        assert!(records[0].url.ends_with("/pictograms/2371"));
        assert_eq!(records[1].keyword, "dog");
        assert!(records[1].url.ends_with("/pictograms/2372"));
    }

    #[tokio::test]
    async fn display_text_prefers_remote_canonical_keyword() {
        let svc = service(serve_stub(None).await);
        let records = svc.fetch_pictograms(&owned(&["cat"]), "en").await;
        assert_eq!(records[0].text, "kitty");
    }

    #[tokio::test]
    async fn empty_keyword_list_on_hit_falls_back_to_search_term() {
        let svc = service(serve_stub(None).await);
        let records = svc.fetch_pictograms(&owned(&["dog", "sun"]), "en").await;
        assert_eq!(records[0].text, "dog");
        assert_eq!(records[1].text, "sun");
    }

    #[tokio::test]
    async fn not_found_and_empty_results_yield_nothing() {
        let svc = service(serve_stub(None).await);
        assert!(svc.fetch_pictograms(&owned(&["ghost"]), "en").await.is_empty());
        assert!(svc.fetch_pictograms(&owned(&["empty"]), "en").await.is_empty());
    }

    #[tokio::test]
    async fn failures_skip_without_dropping_later_keywords() {
        let svc = service(serve_stub(None).await);
        let records = svc
            .fetch_pictograms(&owned(&["boom", "junk", "anonymous", "cat"]), "en")
            .await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].keyword, "cat");
    }

    #[tokio::test]
    async fn unreachable_remote_yields_empty_list() {
        // Port 1 on loopback refuses connections immediately.
        let svc = service("http://127.0.0.1:1/api".to_string());
        assert!(svc.fetch_pictograms(&owned(&["cat"]), "en").await.is_empty());
    }

    #[tokio::test]
    async fn keywords_with_spaces_are_path_encoded() {
        let svc = service(serve_stub(None).await);
        let records = svc.fetch_pictograms(&owned(&["ice cream"]), "en").await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(11));
    }

    #[tokio::test]
    async fn base_path_prefix_is_preserved() {
        let svc = service(serve_stub(Some("/api")).await);
        let records = svc.fetch_pictograms(&owned(&["cat"]), "en").await;
        assert_eq!(records.len(), 1);
        assert!(records[0].url.contains("/api/pictograms/2371"));
    }

    #[tokio::test]
    async fn fetch_by_id_returns_remote_record() {
        let svc = service(serve_stub(None).await);
        let value = svc.get_pictogram_by_id(2371, "en").await;
        assert_eq!(value["_id"], 2371);
        assert_eq!(value["tags"][0], "animal");
    }

    #[tokio::test]
    async fn fetch_by_id_failure_is_empty_object() {
        let svc = service(serve_stub(None).await);
        let value = svc.get_pictogram_by_id(404404, "en").await;
        assert_eq!(value, json!({}));
    }
}
