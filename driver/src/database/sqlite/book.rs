use sqlx::SqliteConnection;
use time::Date;

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Author, AuthorBirthDate, AuthorDateOfDeath, AuthorId, AuthorName, Book, BookId, BookIsbn,
    BookPublicationYear, BookTitle, BookTitleKeyword, BookWithAuthor, NewBook,
};
use kernel::KernelError;

use crate::database::sqlite::{SqliteDatabase, SqliteTransaction};
use crate::error::ConvertError;

pub struct SqliteBookRepository;

#[async_trait::async_trait]
impl BookQuery for SqliteBookRepository {
    type Transaction = SqliteTransaction;

    async fn find_all(
        &self,
        con: &mut SqliteTransaction,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError> {
        SqliteBookInternal::find_all(con, BookSort::Id).await
    }

    async fn find_all_order_by_title(
        &self,
        con: &mut SqliteTransaction,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError> {
        SqliteBookInternal::find_all(con, BookSort::Title).await
    }

    async fn find_all_order_by_author_name(
        &self,
        con: &mut SqliteTransaction,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError> {
        SqliteBookInternal::find_all(con, BookSort::AuthorName).await
    }

    async fn find_by_title_keyword(
        &self,
        con: &mut SqliteTransaction,
        keyword: &BookTitleKeyword,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError> {
        SqliteBookInternal::find_by_title_keyword(con, keyword).await
    }

    async fn find_by_author_id(
        &self,
        con: &mut SqliteTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        SqliteBookInternal::find_by_author_id(con, author_id).await
    }

    async fn count(&self, con: &mut SqliteTransaction) -> error_stack::Result<i64, KernelError> {
        SqliteBookInternal::count(con).await
    }
}

#[async_trait::async_trait]
impl BookModifier for SqliteBookRepository {
    type Transaction = SqliteTransaction;

    async fn create(
        &self,
        con: &mut SqliteTransaction,
        book: &NewBook,
    ) -> error_stack::Result<BookId, KernelError> {
        SqliteBookInternal::create(con, book).await
    }
}

impl DependOnBookQuery for SqliteDatabase {
    type BookQuery = SqliteBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &SqliteBookRepository
    }
}

impl DependOnBookModifier for SqliteDatabase {
    type BookModifier = SqliteBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &SqliteBookRepository
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    isbn: String,
    title: String,
    publication_year: Option<i32>,
    author_id: i64,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book::new(
            BookId::new(row.id),
            BookIsbn::new(row.isbn),
            BookTitle::new(row.title),
            row.publication_year.map(BookPublicationYear::new),
            AuthorId::new(row.author_id),
        )
    }
}

#[derive(sqlx::FromRow)]
struct BookWithAuthorRow {
    #[sqlx(flatten)]
    book: BookRow,
    author_name: String,
    author_birth_date: Option<Date>,
    author_date_of_death: Option<Date>,
}

impl From<BookWithAuthorRow> for BookWithAuthor {
    fn from(row: BookWithAuthorRow) -> Self {
        let author = Author::new(
            AuthorId::new(row.book.author_id),
            AuthorName::new(row.author_name),
            row.author_birth_date.map(AuthorBirthDate::new),
            row.author_date_of_death.map(AuthorDateOfDeath::new),
        );
        BookWithAuthor::new(Book::from(row.book), author)
    }
}

/// ORDER BY clauses for the joined listing. Ties keep insertion order.
#[derive(Debug, Clone, Copy)]
enum BookSort {
    Id,
    Title,
    AuthorName,
}

impl BookSort {
    fn clause(self) -> &'static str {
        match self {
            BookSort::Id => "books.id",
            BookSort::Title => "books.title, books.id",
            BookSort::AuthorName => "authors.name, books.id",
        }
    }
}

// language=sqlite
const SELECT_BOOK_WITH_AUTHOR: &str = r#"
    SELECT
        books.id,
        books.isbn,
        books.title,
        books.publication_year,
        books.author_id,
        authors.name AS author_name,
        authors.birth_date AS author_birth_date,
        authors.date_of_death AS author_date_of_death
    FROM
        books
        INNER JOIN authors ON authors.id = books.author_id
"#;

pub(in crate::database) struct SqliteBookInternal;

impl SqliteBookInternal {
    async fn find_all(
        con: &mut SqliteConnection,
        sort: BookSort,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError> {
        let sql = format!("{SELECT_BOOK_WITH_AUTHOR} ORDER BY {}", sort.clause());
        let rows = sqlx::query_as::<_, BookWithAuthorRow>(&sql)
            .fetch_all(con)
            .await
            .convert_error()?;
        Ok(rows.into_iter().map(BookWithAuthor::from).collect())
    }

    async fn find_by_title_keyword(
        con: &mut SqliteConnection,
        keyword: &BookTitleKeyword,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError> {
        // instr() matches the keyword literally, so '%' and '_' carry no pattern meaning.
        let sql = format!(
            "{SELECT_BOOK_WITH_AUTHOR} WHERE instr(lower(books.title), lower(?)) > 0 ORDER BY {}",
            BookSort::Id.clause()
        );
        let rows = sqlx::query_as::<_, BookWithAuthorRow>(&sql)
            .bind(keyword.as_ref())
            .fetch_all(con)
            .await
            .convert_error()?;
        Ok(rows.into_iter().map(BookWithAuthor::from).collect())
    }

    async fn find_by_author_id(
        con: &mut SqliteConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=sqlite
            r#"
            SELECT id, isbn, title, publication_year, author_id
            FROM books
            WHERE author_id = ?
            ORDER BY id
            "#,
        )
        .bind(author_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn count(con: &mut SqliteConnection) -> error_stack::Result<i64, KernelError> {
        // language=sqlite
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(con)
            .await
            .convert_error()
    }

    async fn create(
        con: &mut SqliteConnection,
        book: &NewBook,
    ) -> error_stack::Result<BookId, KernelError> {
        let result = sqlx::query(
            // language=sqlite
            r#"
            INSERT INTO books (isbn, title, publication_year, author_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(book.isbn().as_ref())
        .bind(book.title().as_ref())
        .bind(
            book.publication_year()
                .as_ref()
                .map(|year| *AsRef::<i32>::as_ref(year)),
        )
        .bind(book.author_id().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(BookId::new(result.last_insert_rowid()))
    }
}
