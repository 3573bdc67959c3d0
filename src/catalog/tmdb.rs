//! TMDB v3 REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{
    append_to_response, CatalogApi, CatalogError, Expansion, MovieDetails, MovieList,
    MovieSummary,
};
use crate::config::TmdbConfig;

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::Transport(e.to_string())
    }
}

/// How requests authenticate against TMDB.
#[derive(Clone, Debug, PartialEq)]
enum Credentials {
    /// v4 read access token, sent as `Authorization: Bearer`
    Bearer(String),
    /// v3 key, sent as the `api_key` query parameter
    ApiKey(String),
    None,
}

#[derive(Clone, Debug)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
    language: String,
}

impl TmdbClient {
    /// Create a client against `base_url` (no trailing slash needed).
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials: Credentials::None,
            language: "en-US".to_string(),
        }
    }

    /// Build a client from configuration, preferring the bearer token over the api key.
    pub fn from_config(config: &TmdbConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let mut tmdb = Self::new(client, config.base_url.clone()).with_language(&config.language);
        if let Some(token) = config.access_token.as_deref().filter(|t| !t.is_empty()) {
            tmdb = tmdb.with_bearer_token(token);
        } else if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            tmdb = tmdb.with_api_key(key);
        } else {
            tracing::warn!("No TMDB credentials configured; catalog requests will be rejected");
        }
        Ok(tmdb)
    }

    pub fn with_bearer_token(mut self, token: &str) -> Self {
        self.credentials = Credentials::Bearer(token.to_string());
        self
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.credentials = Credentials::ApiKey(key.to_string());
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let mut request = self
            .client
            .get(self.url(path))
            .query(&[("language", self.language.as_str())])
            .query(query);

        match &self.credentials {
            Credentials::Bearer(token) => request = request.bearer_auth(token),
            Credentials::ApiKey(key) => request = request.query(&[("api_key", key.as_str())]),
            Credentials::None => {}
        }

        tracing::debug!("TMDB GET {}", path);
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: status_message(&body),
            });
        }
        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }

    /// GET /movie/{movie_id}
    pub async fn movie_details(
        &self,
        movie_id: &str,
        expand: &[Expansion],
    ) -> Result<MovieDetails, CatalogError> {
        let path = format!("/movie/{}", urlencoding::encode(movie_id));
        let append = append_to_response(expand);
        if append.is_empty() {
            self.get(&path, &[]).await
        } else {
            self.get(&path, &[("append_to_response", append.as_str())])
                .await
        }
    }

    /// GET /trending/movie/day
    pub async fn trending_movies(&self) -> Result<MovieList, CatalogError> {
        self.get("/trending/movie/day", &[]).await
    }

    /// GET /search/movie
    pub async fn search_movies(&self, query: &str) -> Result<MovieList, CatalogError> {
        self.get(
            "/search/movie",
            &[("query", query), ("include_adult", "false"), ("page", "1")],
        )
        .await
    }
}

/// TMDB errors carry `status_message`; fall back to the raw body.
fn status_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("status_message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[async_trait(?Send)]
impl CatalogApi for TmdbClient {
    async fn fetch_details(
        &self,
        movie_id: &str,
        expand: &[Expansion],
    ) -> Result<MovieDetails, CatalogError> {
        self.movie_details(movie_id, expand).await
    }

    async fn trending(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        Ok(self.trending_movies().await?.results)
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        Ok(self.search_movies(query).await?.results)
    }
}
