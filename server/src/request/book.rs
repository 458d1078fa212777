use application::transfer::{CreateBookDto, GetAllBookDto, SearchBookDto};
use error_stack::Report;
use kernel::prelude::entity::{BookIsbn, BookOrder, BookTitle};
use kernel::KernelError;
use serde::Deserialize;

use crate::controller::{Intake, TryIntake};
use crate::request::{present_optional_number, required_number, required_text};

/// Raw `POST /add_book` form.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    title: Option<String>,
    isbn: Option<String>,
    publication_year: Option<String>,
    author_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct GetAllBookRequest;

#[derive(Debug)]
pub struct SortBooksRequest {
    sort_by: String,
}

impl SortBooksRequest {
    pub fn new(sort_by: String) -> Self {
        Self { sort_by }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksRequest {
    search_query: Option<String>,
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateBookDto {
            title: required_text(input.title, "title", BookTitle::MAX_LENGTH)?,
            isbn: required_text(input.isbn, "isbn", BookIsbn::MAX_LENGTH)?,
            publication_year: present_optional_number(
                input.publication_year,
                "publication_year",
            )?,
            author_id: required_number(input.author_id, "author_id")?,
        })
    }
}

impl Intake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, _: GetAllBookRequest) -> Self::To {
        GetAllBookDto {
            order: BookOrder::Unsorted,
        }
    }
}

impl Intake<SortBooksRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: SortBooksRequest) -> Self::To {
        GetAllBookDto {
            order: BookOrder::from_key(&input.sort_by),
        }
    }
}

impl Intake<SearchBooksRequest> for BookTransformer {
    type To = SearchBookDto;
    fn emit(&self, input: SearchBooksRequest) -> Self::To {
        SearchBookDto {
            keyword: input.search_query,
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::BookOrder;
    use kernel::KernelError;

    use super::{BookTransformer, CreateBookRequest, SortBooksRequest};
    use crate::controller::{Intake, TryIntake};

    fn form(publication_year: &str, author_id: &str) -> CreateBookRequest {
        CreateBookRequest {
            title: Some("War and Peace".into()),
            isbn: Some("9780140447934".into()),
            publication_year: Some(publication_year.into()),
            author_id: Some(author_id.into()),
        }
    }

    #[test]
    fn valid_form() {
        let dto = TryIntake::emit(&BookTransformer, form("1869", "1")).expect("valid form");
        assert_eq!(dto.title, "War and Peace");
        assert_eq!(dto.isbn, "9780140447934");
        assert_eq!(dto.publication_year, Some(1869));
        assert_eq!(dto.author_id, 1);

        let dto = TryIntake::emit(&BookTransformer, form("", "1")).expect("valid form");
        assert_eq!(dto.publication_year, None);
    }

    #[test]
    fn invalid_forms() {
        let too_long_isbn = CreateBookRequest {
            isbn: Some("97801404479341".into()),
            ..form("1869", "1")
        };
        let missing_year = CreateBookRequest {
            publication_year: None,
            ..form("", "1")
        };
        for request in [
            CreateBookRequest::default(),
            form("1869", "one"),
            form("next year", "1"),
            too_long_isbn,
            missing_year,
        ] {
            let error = TryIntake::emit(&BookTransformer, request)
                .err()
                .expect("invalid form");
            assert_eq!(error.current_context(), &KernelError::InvalidInput);
        }
    }

    #[test]
    fn sort_keys() {
        let order = |key: &str| {
            Intake::emit(&BookTransformer, SortBooksRequest::new(key.into())).order
        };
        assert_eq!(order("title"), BookOrder::Title);
        assert_eq!(order("author"), BookOrder::AuthorName);
        assert_eq!(order("year"), BookOrder::Unsorted);
    }
}
