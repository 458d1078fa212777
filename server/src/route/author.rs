use application::service::CreateAuthorService;
use axum::extract::State;
use axum::routing::get;
use axum::{Form, Router};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{AuthorTransformer, CreateAuthorRequest};
use crate::response::{AddAuthorPage, AuthorPresenter};

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/add_author",
            get(|State(module): State<AppModule>| async move {
                module
                    .views()
                    .render(&AddAuthorPage::default())
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Form(req): Form<CreateAuthorRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| module.database().create_author(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
