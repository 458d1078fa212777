use kernel::prelude::entity::{
    Book, BookOrder, BookWithAuthor, DestructBook, DestructBookWithAuthor,
};

use crate::transfer::AuthorDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            isbn,
            title,
            publication_year,
            author_id,
        } = value.into_destruct();
        Self {
            id: id.into(),
            isbn: isbn.into(),
            title: title.into(),
            publication_year: publication_year.map(Into::into),
            author_id: author_id.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookWithAuthorDto {
    pub book: BookDto,
    pub author: AuthorDto,
}

impl From<BookWithAuthor> for BookWithAuthorDto {
    fn from(value: BookWithAuthor) -> Self {
        let DestructBookWithAuthor { book, author } = value.into_destruct();
        Self {
            book: BookDto::from(book),
            author: AuthorDto::from(author),
        }
    }
}

pub struct GetAllBookDto {
    pub order: BookOrder,
}

pub struct SearchBookDto {
    pub keyword: Option<String>,
}

pub struct GetAuthorBooksDto {
    pub author_id: i64,
}

pub struct CreateBookDto {
    pub title: String,
    pub isbn: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
}
