//! Driving a [`Loader`] from a component.

use std::future::Future;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::catalog::CatalogError;
use crate::details::Loader;

/// Start loading `key` into `loader`.
///
/// Whatever fetch `task` still holds is cancelled first; the generation check
/// in [`Loader::settle`] covers a result that was already on its way back.
pub fn restart_fetch<T, F, Fut>(
    mut loader: Signal<Loader<T>>,
    mut task: Signal<Option<Task>>,
    key: &str,
    fetch: F,
) where
    T: Default + 'static,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, CatalogError>> + 'static,
{
    if let Some(previous) = task.write().take() {
        previous.cancel();
    }

    let ticket = loader.write().begin(key);
    let request = fetch(ticket.key().to_string());
    let handle = spawn(async move {
        let result = request.await;
        loader.write().settle(&ticket, result);
    });
    task.set(Some(handle));
}

/// Cancel any outstanding fetch and return `loader` to idle.
pub fn reset_fetch<T>(mut loader: Signal<Loader<T>>, mut task: Signal<Option<Task>>)
where
    T: Default + 'static,
{
    if let Some(previous) = task.write().take() {
        previous.cancel();
    }
    loader.set(Loader::default());
}
