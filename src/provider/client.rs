//! REST client for the roadmap backend
//!
//! Thin JSON wrapper: optional bearer auth from the [`TokenStore`], backend
//! error bodies surfaced as [`StudioError::ApiRequest`].

use super::model::RoadmapPayload;
use crate::config::ApiConfig;
use crate::error::{Result, StudioError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Access/refresh token pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    pub access: String,
    pub refresh: String,
}

/// File-backed store for the two auth tokens
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Option<Tokens>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn set(&self, tokens: &Tokens) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(tokens)?)?;
        Ok(())
    }

    pub fn access(&self) -> Result<Option<String>> {
        Ok(self.load()?.map(|t| t.access).filter(|t| !t.is_empty()))
    }

    pub fn refresh(&self) -> Result<Option<String>> {
        Ok(self.load()?.map(|t| t.refresh).filter(|t| !t.is_empty()))
    }

    /// Remove both tokens
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Blocking API client
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens: TokenStore::new(config.token_path.clone()),
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, auth: bool) -> Result<T> {
        let url = self.url(path);
        let mut request = self
            .agent
            .get(&url)
            .set("Content-Type", "application/json");

        if auth {
            let token = self.tokens.access()?.ok_or(StudioError::TokenNotFound)?;
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        log::debug!("GET {}", url);
        match request.call() {
            Ok(response) => Ok(response.into_json()?),
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                let message = error_message(&body);
                log::warn!("GET {} failed ({}): {}", url, status, message);
                Err(StudioError::ApiRequest { status, message })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(StudioError::Transport(transport.to_string()))
            }
        }
    }

    /// The signed-in user's roadmap
    pub fn fetch_roadmap(&self) -> Result<RoadmapPayload> {
        let payload: RoadmapPayload = self.get_json("/roadmap/", true)?;
        log::info!(
            "Fetched roadmap '{}' with {} items",
            payload.title,
            payload.items.len()
        );
        Ok(payload)
    }

    /// Raw profile of the signed-in user
    pub fn me(&self) -> Result<serde_json::Value> {
        self.get_json("/users/me/", true)
    }
}

/// Pick the human-readable part of an error body: `detail`, then `message`,
/// then the body itself.
pub fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
        return value.to_string();
    }
    let body = body.trim();
    if body.is_empty() {
        "{}".to_string()
    } else {
        body.to_string()
    }
}
