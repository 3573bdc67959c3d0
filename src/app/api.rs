//! Browser-side catalog client.
//!
//! Requests go to the server's `/api/movies` proxy, which holds the TMDB
//! credentials, rather than to TMDB directly.

use async_trait::async_trait;
use serde::Deserialize;

use crate::catalog::{
    append_to_response, CatalogApi, CatalogError, Expansion, MovieDetails, MovieList,
    MovieSummary,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ProxyCatalog {
    /// Prefix of the proxy routes, e.g. "/api/movies"
    base: String,
}

impl Default for ProxyCatalog {
    fn default() -> Self {
        Self::new("/api/movies")
    }
}

impl ProxyCatalog {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn details_url(&self, movie_id: &str, expand: &[Expansion]) -> String {
        let url = format!("{}/details/{}", self.base, urlencoding::encode(movie_id));
        if expand.is_empty() {
            url
        } else {
            format!("{}?append_to_response={}", url, append_to_response(expand))
        }
    }

    pub fn trending_url(&self) -> String {
        format!("{}/trending", self.base)
    }

    pub fn search_url(&self, query: &str) -> String {
        format!("{}/search?query={}", self.base, urlencoding::encode(query))
    }
}

#[async_trait(?Send)]
impl CatalogApi for ProxyCatalog {
    async fn fetch_details(
        &self,
        movie_id: &str,
        expand: &[Expansion],
    ) -> Result<MovieDetails, CatalogError> {
        fetch_json(&self.details_url(movie_id, expand)).await
    }

    async fn trending(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        let list: MovieList = fetch_json(&self.trending_url()).await?;
        Ok(list.results)
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        let list: MovieList = fetch_json(&self.search_url(query)).await?;
        Ok(list.results)
    }
}

/// Fetch JSON from a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, CatalogError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let transport = |e: wasm_bindgen::JsValue| CatalogError::Transport(format!("{:?}", e));

    let window =
        web_sys::window().ok_or_else(|| CatalogError::Transport("No window".to_string()))?;
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(transport)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| CatalogError::Transport("Not a Response".to_string()))?;

    if !resp.ok() {
        return Err(CatalogError::Status {
            status: resp.status(),
            message: resp.status_text(),
        });
    }

    let json = JsFuture::from(resp.json().map_err(transport)?)
        .await
        .map_err(|e| CatalogError::Decode(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| CatalogError::Decode(e.to_string()))
}

/// Native stub - the proxy client only runs in the browser
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(_url: &str) -> Result<T, CatalogError> {
    Err(CatalogError::Transport(
        "fetch_json is only available in browser".to_string(),
    ))
}
