//! Mock TMDB v3 API
//!
//! Serves `/3/movie/{id}`, `/3/trending/movie/day` and `/3/search/movie`
//! from an in-memory catalog, requires a bearer token, and counts requests.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub const TOKEN: &str = "test-token";

/// Mock TMDB state
struct MockTmdbState {
    movies: HashMap<String, Value>,
    requests: AtomicUsize,
    last_query: std::sync::Mutex<HashMap<String, String>>,
}

/// Mock TMDB Server
pub struct MockTmdbServer {
    addr: SocketAddr,
    state: Arc<RwLock<MockTmdbState>>,
    handle: JoinHandle<()>,
}

impl MockTmdbServer {
    /// Start a mock TMDB server on a random port
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockTmdbState {
            movies: HashMap::new(),
            requests: AtomicUsize::new(0),
            last_query: std::sync::Mutex::new(HashMap::new()),
        }));

        let app = Router::new()
            .route("/3/movie/{movie_id}", get(handle_movie))
            .route("/3/trending/movie/day", get(handle_trending))
            .route("/3/search/movie", get(handle_search))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL to hand to the client under test
    pub fn base_url(&self) -> String {
        format!("http://{}/3", self.addr)
    }

    /// Add a movie record (the full expanded payload)
    pub async fn add_movie(&self, movie_id: &str, record: Value) {
        let mut state = self.state.write().await;
        state.movies.insert(movie_id.to_string(), record);
    }

    /// Number of requests served so far
    pub async fn request_count(&self) -> usize {
        self.state.read().await.requests.load(Ordering::SeqCst)
    }

    /// Query parameters of the most recent request
    pub async fn last_query(&self) -> HashMap<String, String> {
        self.state.read().await.last_query.lock().unwrap().clone()
    }

    /// Stop the mock server
    pub async fn stop(self) {
        self.handle.abort();
    }
}

/// Fight Club with every expansion the details page asks for
pub fn fight_club() -> Value {
    json!({
        "id": 550,
        "title": "Fight Club",
        "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        "release_date": "1999-10-15",
        "vote_average": 8.4,
        "overview": "A ticking-time-bomb insomniac and a slippery soap salesman channel primal male aggression into a shocking new form of therapy.",
        "genres": [{"id": 18, "name": "Drama"}],
        "original_language": "en",
        "production_countries": [{"iso_3166_1": "US", "name": "United States of America"}],
        "credits": {
            "cast": [
                {"id": 819, "name": "Edward Norton", "character": "Narrator", "profile_path": "/8nytsqL59SFJTVYVrN72k6qkGgJ.jpg"},
                {"id": 287, "name": "Brad Pitt", "character": "Tyler Durden", "profile_path": null}
            ]
        },
        "reviews": {
            "page": 1,
            "results": [{"id": "5b1c13b9c3a36848f2026384", "author": "Goddard", "content": "Pretty awesome movie."}],
            "total_pages": 1,
            "total_results": 1
        },
        "videos": {
            "results": [{"id": "64f1", "key": "qtRKdVHc-cE", "name": "Official Trailer", "site": "YouTube", "type": "Trailer"}]
        }
    })
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v == format!("Bearer {}", TOKEN))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "success": false,
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        })),
    )
        .into_response()
}

async fn record_request(state: &Arc<RwLock<MockTmdbState>>, query: &HashMap<String, String>) {
    let state = state.read().await;
    state.requests.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = query.clone();
}

async fn handle_movie(
    State(state): State<Arc<RwLock<MockTmdbState>>>,
    Path(movie_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record_request(&state, &query).await;
    if !authorized(&headers) {
        return unauthorized();
    }

    let state = state.read().await;
    let Some(record) = state.movies.get(&movie_id) else {
        return not_found();
    };

    // Only include the sub-resources that were asked for, like TMDB does
    let requested: Vec<&str> = query
        .get("append_to_response")
        .map(|s| s.split(',').collect())
        .unwrap_or_default();
    let mut record = record.clone();
    if let Some(obj) = record.as_object_mut() {
        for key in ["credits", "reviews", "videos"] {
            if !requested.contains(&key) {
                obj.remove(key);
            }
        }
    }
    Json(record).into_response()
}

fn summaries(movies: &HashMap<String, Value>, filter: impl Fn(&Value) -> bool) -> Value {
    let mut results: Vec<Value> = movies
        .values()
        .filter(|m| filter(m))
        .map(|m| {
            json!({
                "id": m["id"],
                "title": m["title"],
                "poster_path": m["poster_path"],
                "release_date": m["release_date"],
                "vote_average": m["vote_average"],
            })
        })
        .collect();
    results.sort_by_key(|m| m["id"].as_i64());
    let total = results.len();
    json!({"page": 1, "results": results, "total_pages": 1, "total_results": total})
}

async fn handle_trending(
    State(state): State<Arc<RwLock<MockTmdbState>>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record_request(&state, &query).await;
    if !authorized(&headers) {
        return unauthorized();
    }
    let state = state.read().await;
    Json(summaries(&state.movies, |_| true)).into_response()
}

async fn handle_search(
    State(state): State<Arc<RwLock<MockTmdbState>>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record_request(&state, &query).await;
    if !authorized(&headers) {
        return unauthorized();
    }
    let needle = query.get("query").cloned().unwrap_or_default().to_lowercase();
    let state = state.read().await;
    Json(summaries(&state.movies, |m| {
        m["title"]
            .as_str()
            .map_or(false, |t| t.to_lowercase().contains(&needle))
    }))
    .into_response()
}
