//! App Router

use salvo::Router;

use crate::{healthcheck, products};

/// Every API route, without hoops or documentation routes.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
}
