mod author;
mod book;

pub use self::{author::*, book::*};

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::AppModule;

pub fn router(module: AppModule) -> Router {
    Router::new()
        .route_book()
        .route_author()
        .layer(TraceLayer::new_for_http())
        .with_state(module)
}
