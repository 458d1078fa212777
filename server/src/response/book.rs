use application::transfer::{AuthorDto, BookWithAuthorDto};
use serde::Serialize;

use crate::controller::Exhaust;
use crate::response::AuthorResponse;
use crate::view::Page;

pub const BOOK_ADDED_MESSAGE: &str = "Book added successfully!";

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: i64,
    isbn: String,
    title: String,
    publication_year: Option<i32>,
    author: AuthorResponse,
}

impl From<BookWithAuthorDto> for BookResponse {
    fn from(value: BookWithAuthorDto) -> Self {
        let BookWithAuthorDto { book, author } = value;
        Self {
            id: book.id,
            isbn: book.isbn,
            title: book.title,
            publication_year: book.publication_year,
            author: AuthorResponse::from(author),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookListPage {
    books: Vec<BookResponse>,
}

impl Page for BookListPage {
    const TEMPLATE: &'static str = "home";
}

#[derive(Debug, Serialize)]
pub struct AddBookPage {
    authors: Vec<AuthorResponse>,
    message: Option<&'static str>,
}

impl AddBookPage {
    pub fn new(authors: Vec<AuthorDto>, message: Option<&'static str>) -> Self {
        Self {
            authors: authors.into_iter().map(AuthorResponse::from).collect(),
            message,
        }
    }
}

impl Page for AddBookPage {
    const TEMPLATE: &'static str = "add_book";
}

/// Outcome of a stored book: the authors to offer in the next form.
pub struct BookCreated {
    authors: Vec<AuthorDto>,
}

impl BookCreated {
    pub fn new(authors: Vec<AuthorDto>) -> Self {
        Self { authors }
    }
}

pub struct BookPresenter;

impl Exhaust<Vec<BookWithAuthorDto>> for BookPresenter {
    type To = BookListPage;
    fn emit(&self, input: Vec<BookWithAuthorDto>) -> Self::To {
        BookListPage {
            books: input.into_iter().map(BookResponse::from).collect(),
        }
    }
}

impl Exhaust<BookCreated> for BookPresenter {
    type To = AddBookPage;
    fn emit(&self, input: BookCreated) -> Self::To {
        AddBookPage::new(input.authors, Some(BOOK_ADDED_MESSAGE))
    }
}
