//! The hero API client.
//!
//! # Design
//! `HeroClient` holds a trimmed `base_url` and two injected collaborators: a
//! [`Transport`] that performs the HTTP round-trips and a [`Notifier`] that
//! receives one human-readable line per outcome. Each operation is a thin
//! pipeline — build the URL, delegate to the transport, deserialize — split
//! into a private fallible `try_*` half and a public wrapper that applies
//! the shared recovery stage: on any failure the raw error goes to the
//! `tracing` diagnostic log, the notifier gets `<operation> failed:
//! <message>`, and the caller receives the operation's fallback value.
//! Callers never see an error.

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::error::ApiError;
use crate::notify::Notifier;
use crate::transport::Transport;
use crate::types::{Hero, HeroId, NewHero};

/// Asynchronous client for one `/heroes` collection endpoint.
///
/// Stateless between calls: it holds only the base URL and the collaborator
/// handles, so concurrent operations are independent. Every operation
/// resolves to a success shape or to its fallback (empty vec for
/// collections, `None` otherwise) — transport failures, bad statuses, and
/// undecodable bodies surface only as log entries.
pub struct HeroClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
}

impl HeroClient {
    /// Create a client for the API rooted at `base_url` (a trailing `/` is
    /// ignored). Heroes live at `<base_url>/heroes`.
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            notifier,
        }
    }

    /// Fetch every hero. Resolves to an empty vec on failure.
    pub async fn list_heroes(&self) -> Vec<Hero> {
        self.try_list()
            .await
            .inspect(|_| self.log("fetched heroes"))
            .unwrap_or_else(self.handle_error("list".to_string(), Vec::new()))
    }

    /// Fetch one hero by id.
    ///
    /// Resolves to `None` on failure; a missing hero and a failed request
    /// are indistinguishable here, by contract.
    pub async fn get_hero(&self, id: u32) -> Option<Hero> {
        self.try_get(id)
            .await
            .inspect(|_| self.log(format!("fetched hero id={id}")))
            .map(Some)
            .unwrap_or_else(self.handle_error(format!("getById id={id}"), None))
    }

    /// Create a hero; the server assigns the id. Resolves to the stored
    /// record, or `None` on failure.
    pub async fn create_hero(&self, hero: &NewHero) -> Option<Hero> {
        self.try_create(hero)
            .await
            .inspect(|created| self.log(format!("add hero w/ id={}", created.id)))
            .map(Some)
            .unwrap_or_else(self.handle_error("create".to_string(), None))
    }

    /// Replace a hero's stored record. Resolves to the server's opaque
    /// acknowledgment (`Value::Null` when the server sends no body), or
    /// `None` on failure.
    pub async fn update_hero(&self, hero: &Hero) -> Option<Value> {
        self.try_update(hero)
            .await
            .inspect(|_| self.log(format!("updated hero id={}", hero.id)))
            .map(Some)
            .unwrap_or_else(self.handle_error(format!("update id={}", hero.id), None))
    }

    /// Delete a hero, addressed by id or by the record itself. Resolves to
    /// the deleted record as reported by the store, or `None` on failure.
    pub async fn delete_hero(&self, hero: impl Into<HeroId>) -> Option<Hero> {
        let id = hero.into();
        self.try_delete(id)
            .await
            .inspect(|_| self.log(format!("delete hero id={id}")))
            .map(Some)
            .unwrap_or_else(self.handle_error(format!("delete id={id}"), None))
    }

    /// Fetch heroes whose name contains `term`.
    ///
    /// A blank term resolves to an empty vec without touching the transport;
    /// failures also resolve to an empty vec.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        self.try_search(term)
            .await
            .inspect(|heroes| {
                if heroes.is_empty() {
                    self.log(format!("no heroes matching \"{term}\""));
                } else {
                    self.log(format!("found heroes matching \"{term}\""));
                }
            })
            .unwrap_or_else(self.handle_error("search".to_string(), Vec::new()))
    }

    async fn try_list(&self) -> Result<Vec<Hero>, ApiError> {
        let body = self.transport.get(&self.heroes_url()).await?;
        decode(&body)
    }

    async fn try_get(&self, id: u32) -> Result<Hero, ApiError> {
        let url = format!("{}/{id}", self.heroes_url());
        let body = self.transport.get(&url).await?;
        decode(&body)
    }

    async fn try_create(&self, hero: &NewHero) -> Result<Hero, ApiError> {
        let payload = encode(hero)?;
        let body = self
            .transport
            .post(&self.heroes_url(), payload, &json_headers())
            .await?;
        decode(&body)
    }

    async fn try_update(&self, hero: &Hero) -> Result<Value, ApiError> {
        let payload = encode(hero)?;
        let body = self
            .transport
            .put(&self.heroes_url(), payload, &json_headers())
            .await?;
        // An empty body is a valid acknowledgment, not a decode failure.
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        decode(&body)
    }

    async fn try_delete(&self, id: HeroId) -> Result<Hero, ApiError> {
        let url = format!("{}/{id}", self.heroes_url());
        let body = self.transport.delete(&url, &json_headers()).await?;
        decode(&body)
    }

    async fn try_search(&self, term: &str) -> Result<Vec<Hero>, ApiError> {
        let term = utf8_percent_encode(term, NON_ALPHANUMERIC);
        let url = format!("{}/?name={term}", self.heroes_url());
        let body = self.transport.get(&url).await?;
        decode(&body)
    }

    fn heroes_url(&self) -> String {
        format!("{}/heroes", self.base_url)
    }

    /// Send one line to the notifier, tagged with the client name.
    fn log(&self, message: impl Into<String>) {
        self.notifier.add(format!("HeroClient: {}", message.into()));
    }

    /// The shared recovery stage. Returns the closure that records `err` to
    /// the diagnostic log, notifies `<operation> failed: <message>`, and
    /// substitutes `fallback`, parameterized per call site.
    fn handle_error<'a, T: 'a>(
        &'a self,
        operation: String,
        fallback: T,
    ) -> impl FnOnce(ApiError) -> T + 'a {
        move |err| {
            error!(operation = %operation, error = %err, "hero request failed");
            self.log(format!("{operation} failed: {err}"));
            fallback
        }
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
