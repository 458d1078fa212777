mod id;
mod isbn;
mod keyword;
mod order;
mod publication_year;
mod title;

pub use self::{id::*, isbn::*, keyword::*, order::*, publication_year::*, title::*};
use crate::entity::{Author, AuthorId};
use destructure::Destructure;
use std::fmt::{Display, Formatter};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    isbn: BookIsbn,
    title: BookTitle,
    publication_year: Option<BookPublicationYear>,
    author_id: AuthorId,
}

impl Book {
    pub fn new(
        id: BookId,
        isbn: BookIsbn,
        title: BookTitle,
        publication_year: Option<BookPublicationYear>,
        author_id: AuthorId,
    ) -> Self {
        Self {
            id,
            isbn,
            title,
            publication_year,
            author_id,
        }
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(AsRef::<String>::as_ref(&self.title))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct NewBook {
    isbn: BookIsbn,
    title: BookTitle,
    publication_year: Option<BookPublicationYear>,
    author_id: AuthorId,
}

impl NewBook {
    pub fn new(
        isbn: BookIsbn,
        title: BookTitle,
        publication_year: Option<BookPublicationYear>,
        author_id: AuthorId,
    ) -> Self {
        Self {
            isbn,
            title,
            publication_year,
            author_id,
        }
    }
}

/// A book joined with the author its `author_id` resolves to.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookWithAuthor {
    book: Book,
    author: Author,
}

impl BookWithAuthor {
    pub fn new(book: Book, author: Author) -> Self {
        Self { book, author }
    }
}
