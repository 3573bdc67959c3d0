#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Details page load flow
//!
//! Drives the details loader the way the page does (begin, await the
//! catalog, settle) against a catalog whose responses are released by hand,
//! so every interleaving of outstanding requests can be checked poll by poll.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use tokio_test::{assert_pending, assert_ready, task};

use movie_finder::catalog::{
    CatalogApi, CatalogError, Expansion, MovieDetails, MovieSummary, Named, DETAIL_EXPANSIONS,
};
use movie_finder::details::{
    DetailsLoader, DetailsView, LoadState, PresentationSettings, Settlement,
};

type Reply = Result<MovieDetails, CatalogError>;

// =============================================================================
// Test utilities
// =============================================================================

/// Catalog whose details responses are held until the test releases them
#[derive(Default)]
struct GatedCatalog {
    pending: RefCell<HashMap<String, oneshot::Receiver<Reply>>>,
    requests: Cell<usize>,
}

impl GatedCatalog {
    /// Register the next request for `movie_id`; the reply is sent through the returned handle
    fn gate(&self, movie_id: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().insert(movie_id.to_string(), rx);
        tx
    }
}

#[async_trait(?Send)]
impl CatalogApi for GatedCatalog {
    async fn fetch_details(
        &self,
        movie_id: &str,
        expand: &[Expansion],
    ) -> Result<MovieDetails, CatalogError> {
        assert_eq!(expand, DETAIL_EXPANSIONS);
        self.requests.set(self.requests.get() + 1);

        let rx = self.pending.borrow_mut().remove(movie_id);
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(CatalogError::Transport("connection dropped".into()))),
            None => Err(CatalogError::Transport(format!("no gate for {}", movie_id))),
        }
    }

    async fn trending(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        Ok(Vec::new())
    }

    async fn search(&self, _query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        Ok(Vec::new())
    }
}

/// What the page does on mount / id change: begin now, settle when the reply lands.
fn load<'a>(
    catalog: &'a GatedCatalog,
    loader: &Rc<RefCell<DetailsLoader>>,
    movie_id: &str,
) -> impl Future<Output = Settlement> + 'a {
    let ticket = loader.borrow_mut().begin(movie_id);
    let loader = loader.clone();
    let movie_id = movie_id.to_string();
    async move {
        let result = catalog.fetch_details(&movie_id, DETAIL_EXPANSIONS).await;
        let settlement = loader.borrow_mut().settle(&ticket, result);
        settlement
    }
}

fn movie(id: i64, title: &str) -> MovieDetails {
    MovieDetails {
        id,
        title: title.to_string(),
        vote_average: Some(8.4),
        genres: vec![Named {
            name: "Drama".into(),
        }],
        ..Default::default()
    }
}

fn view(loader: &Rc<RefCell<DetailsLoader>>) -> DetailsView {
    DetailsView::new(&loader.borrow(), &PresentationSettings::default())
}

// =============================================================================
// Single request
// =============================================================================

#[test]
fn outstanding_request_shows_loader() {
    let catalog = GatedCatalog::default();
    let loader = Rc::new(RefCell::new(DetailsLoader::default()));
    let reply = catalog.gate("550");

    let mut fetch = task::spawn(load(&catalog, &loader, "550"));
    assert_pending!(fetch.poll());

    let rendered = view(&loader);
    assert_eq!(loader.borrow().state(), LoadState::Loading);
    assert!(rendered.show_loader);
    assert!(rendered.error_message.is_none());

    reply.send(Ok(movie(550, "Fight Club"))).unwrap();
    assert!(fetch.is_woken());
    assert_eq!(
        assert_ready!(fetch.poll()),
        Settlement::Applied(LoadState::Ready)
    );

    let rendered = view(&loader);
    assert!(!rendered.show_loader);
    assert!(rendered.error_message.is_none());
    assert_eq!(rendered.title, "Fight Club");
    assert_eq!(rendered.user_score, "8.4");
    assert_eq!(rendered.genres, "Drama");
    assert_eq!(catalog.requests.get(), 1);
}

#[test]
fn rejected_request_shows_error_message() {
    let catalog = GatedCatalog::default();
    let loader = Rc::new(RefCell::new(DetailsLoader::default()));
    let reply = catalog.gate("bad-id");

    let mut fetch = task::spawn(load(&catalog, &loader, "bad-id"));
    assert_pending!(fetch.poll());

    reply
        .send(Err(CatalogError::Status {
            status: 404,
            message: "The resource you requested could not be found.".into(),
        }))
        .unwrap();
    assert_eq!(
        assert_ready!(fetch.poll()),
        Settlement::Applied(LoadState::Error)
    );

    let rendered = view(&loader);
    assert!(!rendered.show_loader);
    assert_eq!(rendered.error_message, Some("Error, try again, please."));
    assert_eq!(rendered.title, "");
}

#[test]
fn dropped_connection_is_an_error_too() {
    let catalog = GatedCatalog::default();
    let loader = Rc::new(RefCell::new(DetailsLoader::default()));
    let reply = catalog.gate("550");

    let mut fetch = task::spawn(load(&catalog, &loader, "550"));
    assert_pending!(fetch.poll());

    drop(reply);
    assert_eq!(
        assert_ready!(fetch.poll()),
        Settlement::Applied(LoadState::Error)
    );
}

// =============================================================================
// Identifier changes while a request is outstanding
// =============================================================================

#[test]
fn late_result_for_previous_id_is_discarded() {
    let catalog = GatedCatalog::default();
    let loader = Rc::new(RefCell::new(DetailsLoader::default()));
    let first_reply = catalog.gate("550");
    let second_reply = catalog.gate("13");

    let mut first = task::spawn(load(&catalog, &loader, "550"));
    assert_pending!(first.poll());
    let mut second = task::spawn(load(&catalog, &loader, "13"));
    assert_pending!(second.poll());

    // Newer id settles first, then the old one arrives
    second_reply.send(Ok(movie(13, "Forrest Gump"))).unwrap();
    assert_eq!(
        assert_ready!(second.poll()),
        Settlement::Applied(LoadState::Ready)
    );
    first_reply.send(Ok(movie(550, "Fight Club"))).unwrap();
    assert_eq!(assert_ready!(first.poll()), Settlement::Stale);

    assert_eq!(loader.borrow().key(), Some("13"));
    assert_eq!(view(&loader).title, "Forrest Gump");
}

#[test]
fn early_result_for_previous_id_is_discarded() {
    let catalog = GatedCatalog::default();
    let loader = Rc::new(RefCell::new(DetailsLoader::default()));
    let first_reply = catalog.gate("550");
    let second_reply = catalog.gate("13");

    let mut first = task::spawn(load(&catalog, &loader, "550"));
    assert_pending!(first.poll());
    let mut second = task::spawn(load(&catalog, &loader, "13"));
    assert_pending!(second.poll());

    // Old id settles while the new one is still outstanding
    first_reply.send(Ok(movie(550, "Fight Club"))).unwrap();
    assert_eq!(assert_ready!(first.poll()), Settlement::Stale);

    let rendered = view(&loader);
    assert!(rendered.show_loader);
    assert_eq!(rendered.title, "");

    second_reply
        .send(Err(CatalogError::Decode("expected value".into())))
        .unwrap();
    assert_eq!(
        assert_ready!(second.poll()),
        Settlement::Applied(LoadState::Error)
    );
    assert_eq!(view(&loader).title, "");
}

#[test]
fn cancelled_request_never_settles() {
    let catalog = GatedCatalog::default();
    let loader = Rc::new(RefCell::new(DetailsLoader::default()));
    let first_reply = catalog.gate("550");
    let second_reply = catalog.gate("13");

    let mut first = task::spawn(load(&catalog, &loader, "550"));
    assert_pending!(first.poll());

    // Navigating away cancels the outstanding task before starting the next
    drop(first);
    let mut second = task::spawn(load(&catalog, &loader, "13"));
    assert_pending!(second.poll());

    assert!(first_reply.send(Ok(movie(550, "Fight Club"))).is_err());
    second_reply.send(Ok(movie(13, "Forrest Gump"))).unwrap();
    assert_eq!(
        assert_ready!(second.poll()),
        Settlement::Applied(LoadState::Ready)
    );
    assert_eq!(view(&loader).title, "Forrest Gump");
    assert_eq!(catalog.requests.get(), 2);
}
