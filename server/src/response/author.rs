use application::transfer::AuthorDto;
use axum::response::Redirect;
use serde::Serialize;

use crate::controller::Exhaust;
use crate::response::AddBookPage;
use crate::view::Page;

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: i64,
    name: String,
    birth_date: Option<String>,
    date_of_death: Option<String>,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            birth_date: value.birth_date.map(|date| date.to_string()),
            date_of_death: value.date_of_death.map(|date| date.to_string()),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct AddAuthorPage {}

impl Page for AddAuthorPage {
    const TEMPLATE: &'static str = "add_author";
}

pub struct AuthorPresenter;

/// A stored author sends the browser back to the catalog.
impl Exhaust<i64> for AuthorPresenter {
    type To = Redirect;
    fn emit(&self, _: i64) -> Self::To {
        Redirect::to("/")
    }
}

impl Exhaust<Vec<AuthorDto>> for AuthorPresenter {
    type To = AddBookPage;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        AddBookPage::new(input, None)
    }
}
