use application::service::{CreateBookService, GetAuthorService, GetBookService};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Form, Router};
use error_stack::Report;
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CreateBookRequest, GetAllBookRequest, SearchBooksRequest, SortBooksRequest,
};
use crate::response::{AuthorPresenter, BookCreated, BookPresenter};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/",
            get(|State(module): State<AppModule>| async move {
                let page = Controller::new(BookTransformer, BookPresenter)
                    .intake(GetAllBookRequest)
                    .handle(|dto| module.database().get_books(dto))
                    .await
                    .map_err(ErrorStatus::from)?;
                module.views().render(&page).map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/sort_books/:sort_by",
            get(
                |State(module): State<AppModule>, Path(sort_by): Path<String>| async move {
                    let page = Controller::new(BookTransformer, BookPresenter)
                        .intake(SortBooksRequest::new(sort_by))
                        .handle(|dto| module.database().get_books(dto))
                        .await
                        .map_err(ErrorStatus::from)?;
                    module.views().render(&page).map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/search_books",
            get(
                |State(module): State<AppModule>, Query(req): Query<SearchBooksRequest>| async move {
                    let page = Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| module.database().search_books(dto))
                        .await
                        .map_err(ErrorStatus::from)?;
                    module.views().render(&page).map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/add_book",
            get(|State(module): State<AppModule>| async move {
                let page = Controller::new((), AuthorPresenter)
                    .bypass(|| module.database().get_authors())
                    .await
                    .map_err(ErrorStatus::from)?;
                module.views().render(&page).map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Form(req): Form<CreateBookRequest>| async move {
                    let database = module.database();
                    let page = Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move {
                            database.create_book(dto).await?;
                            let authors = database.get_authors().await?;
                            Ok::<_, Report<KernelError>>(BookCreated::new(authors))
                        })
                        .await
                        .map_err(ErrorStatus::from)?;
                    module.views().render(&page).map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
