use std::collections::HashMap;
use std::rc::Rc;

use gloo_net::http::Request;
use thiserror::Error;
use yew::prelude::*;

use crate::config;
use crate::entities::{CyberAwarenessTopic, TopicsResponse};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    #[error("content store unreachable: {0}")]
    Network(String),
    #[error("content store answered with status {0}")]
    Status(u16),
    #[error("could not decode content: {0}")]
    Decode(String),
    #[error("no such item")]
    NotFound,
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound)
    }
}

#[derive(Clone, PartialEq)]
enum Source {
    Http { base_url: String },
    InMemory(Rc<HashMap<String, Vec<CyberAwarenessTopic>>>),
}

/// Read-only access to the CMS collections.
///
/// Provided to every page through a `ContextProvider` at the app root, so
/// pages never build their own and tests can hand in fixed content.
#[derive(Clone, PartialEq)]
pub struct ContentClient {
    source: Source,
}

impl ContentClient {
    pub fn http(base_url: impl Into<String>) -> Self {
        Self {
            source: Source::Http { base_url: base_url.into() },
        }
    }

    pub fn in_memory(collection: &str, items: Vec<CyberAwarenessTopic>) -> Self {
        let mut collections = HashMap::new();
        collections.insert(collection.to_string(), items);
        Self {
            source: Source::InMemory(Rc::new(collections)),
        }
    }

    /// Every item of `collection`, in the order the store returns them.
    pub async fn fetch_all(&self, collection: &str) -> Result<Vec<CyberAwarenessTopic>, ContentError> {
        match &self.source {
            Source::Http { base_url } => {
                let url = format!(
                    "{}/api/collections/{}/items",
                    base_url,
                    urlencoding::encode(collection)
                );
                let response = Request::get(&url)
                    .send()
                    .await
                    .map_err(|e| ContentError::Network(e.to_string()))?;
                if !response.ok() {
                    return Err(ContentError::Status(response.status()));
                }
                let body = response
                    .json::<TopicsResponse>()
                    .await
                    .map_err(|e| ContentError::Decode(e.to_string()))?;
                Ok(body.items)
            }
            Source::InMemory(collections) => {
                Ok(collections.get(collection).cloned().unwrap_or_default())
            }
        }
    }

    pub async fn fetch_by_id(&self, collection: &str, id: &str) -> Result<CyberAwarenessTopic, ContentError> {
        match &self.source {
            Source::Http { base_url } => {
                let url = format!(
                    "{}/api/collections/{}/items/{}",
                    base_url,
                    urlencoding::encode(collection),
                    urlencoding::encode(id)
                );
                let response = Request::get(&url)
                    .send()
                    .await
                    .map_err(|e| ContentError::Network(e.to_string()))?;
                if response.status() == 404 {
                    return Err(ContentError::NotFound);
                }
                if !response.ok() {
                    return Err(ContentError::Status(response.status()));
                }
                response
                    .json::<CyberAwarenessTopic>()
                    .await
                    .map_err(|e| ContentError::Decode(e.to_string()))
            }
            Source::InMemory(collections) => collections
                .get(collection)
                .and_then(|items| items.iter().find(|t| t.id == id))
                .cloned()
                .ok_or(ContentError::NotFound),
        }
    }
}

impl Default for ContentClient {
    fn default() -> Self {
        Self::http(config::get_backend_url())
    }
}

/// The client from context, or the default HTTP client when a page is
/// rendered outside the app shell.
#[hook]
pub fn use_content() -> ContentClient {
    use_context::<ContentClient>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn topic(id: &str, name: &str) -> CyberAwarenessTopic {
        CyberAwarenessTopic {
            id: id.into(),
            topic_name: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn fetch_all_keeps_store_order() {
        let client = ContentClient::in_memory(
            config::TOPICS_COLLECTION,
            vec![topic("b", "Second"), topic("a", "First")],
        );
        let items = block_on(client.fetch_all(config::TOPICS_COLLECTION)).unwrap();
        let ids: Vec<_> = items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn unknown_collection_is_empty() {
        let client = ContentClient::in_memory(config::TOPICS_COLLECTION, vec![topic("a", "A")]);
        let items = block_on(client.fetch_all("somethingelse")).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn fetch_by_id_finds_the_record() {
        let client = ContentClient::in_memory(
            config::TOPICS_COLLECTION,
            vec![topic("a", "A"), topic("b", "B")],
        );
        let found = block_on(client.fetch_by_id(config::TOPICS_COLLECTION, "b")).unwrap();
        assert_eq!(found.topic_name.as_deref(), Some("B"));
    }

    #[test]
    fn missing_id_is_not_found() {
        let client = ContentClient::in_memory(config::TOPICS_COLLECTION, vec![topic("a", "A")]);
        let err = block_on(client.fetch_by_id(config::TOPICS_COLLECTION, "abc")).unwrap_err();
        assert!(err.is_not_found());
        assert!(!ContentError::Status(500).is_not_found());
    }
}
