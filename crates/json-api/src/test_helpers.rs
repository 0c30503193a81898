//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::products::{
        CatalogService, ProductsService, repository::InMemoryProductsRepository,
    },
};

use crate::state::State;

/// A catalog service backed by a fresh, empty in-memory store.
pub(crate) fn in_memory_catalog() -> CatalogService {
    CatalogService::new(Arc::new(InMemoryProductsRepository::new()))
}

pub(crate) fn state_with_products(products: impl ProductsService + 'static) -> Arc<State> {
    State::from_app_context(AppContext::from_products(Arc::new(products)))
}

pub(crate) fn products_service(products: impl ProductsService + 'static, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
