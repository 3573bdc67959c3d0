//! Catalog client shared via context.
//!
//! Pages never build their own client; tests and alternative front ends can
//! install any [`CatalogApi`] at the root.

use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::catalog::CatalogApi;

#[derive(Clone)]
pub struct CatalogHandle(Rc<dyn CatalogApi>);

impl CatalogHandle {
    pub fn new(api: impl CatalogApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl Deref for CatalogHandle {
    type Target = dyn CatalogApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Install the catalog client - call once at app root
pub fn use_catalog_provider(init: impl FnOnce() -> CatalogHandle) -> CatalogHandle {
    use_context_provider(init)
}

/// Get the catalog client - use in any component
pub fn use_catalog() -> CatalogHandle {
    use_context::<CatalogHandle>()
}
