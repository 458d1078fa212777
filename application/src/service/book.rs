use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction,
};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    AuthorId, BookIsbn, BookOrder, BookPublicationYear, BookTitle, BookTitleKeyword, NewBook,
};
use kernel::KernelError;

use crate::transfer::{
    BookDto, BookWithAuthorDto, CreateBookDto, GetAllBookDto, GetAuthorBooksDto, SearchBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookWithAuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let query = self.book_query();
        let books = match dto.order {
            BookOrder::Title => query.find_all_order_by_title(&mut connection).await?,
            BookOrder::AuthorName => query.find_all_order_by_author_name(&mut connection).await?,
            BookOrder::Unsorted => query.find_all(&mut connection).await?,
        };

        Ok(books.into_iter().map(BookWithAuthorDto::from).collect())
    }

    async fn search_books(
        &self,
        dto: SearchBookDto,
    ) -> error_stack::Result<Vec<BookWithAuthorDto>, KernelError> {
        let Some(keyword) = BookTitleKeyword::parse(dto.keyword) else {
            return Ok(Vec::new());
        };

        let mut connection = self.database_connection().transact().await?;
        let books = self
            .book_query()
            .find_by_title_keyword(&mut connection, &keyword)
            .await?;

        Ok(books.into_iter().map(BookWithAuthorDto::from).collect())
    }

    async fn get_books_by_author(
        &self,
        dto: GetAuthorBooksDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let author_id = AuthorId::new(dto.author_id);
        let books = self
            .book_query()
            .find_by_author_id(&mut connection, &author_id)
            .await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<i64, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let book = NewBook::new(
            BookIsbn::new(dto.isbn),
            BookTitle::new(dto.title),
            dto.publication_year.map(BookPublicationYear::new),
            AuthorId::new(dto.author_id),
        );
        let id = self.book_modifier().create(&mut connection, &book).await?;
        connection.commit().await?;

        let id: i64 = id.into();
        tracing::debug!(id, "book created");
        Ok(id)
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[cfg(test)]
mod test {
    use driver::database::SqliteDatabase;
    use kernel::prelude::entity::BookOrder;
    use kernel::KernelError;

    use crate::service::{CreateAuthorService, CreateBookService, GetBookService};
    use crate::transfer::{
        CreateAuthorDto, CreateBookDto, GetAllBookDto, GetAuthorBooksDto, SearchBookDto,
    };

    async fn author(db: &SqliteDatabase, name: &str) -> error_stack::Result<i64, KernelError> {
        db.create_author(CreateAuthorDto {
            name: name.to_string(),
            birth_date: None,
            date_of_death: None,
        })
        .await
    }

    async fn book(
        db: &SqliteDatabase,
        title: &str,
        isbn: &str,
        author_id: i64,
    ) -> error_stack::Result<i64, KernelError> {
        db.create_book(CreateBookDto {
            title: title.to_string(),
            isbn: isbn.to_string(),
            publication_year: None,
            author_id,
        })
        .await
    }

    fn titles(books: &[crate::transfer::BookWithAuthorDto]) -> Vec<&str> {
        books.iter().map(|b| b.book.title.as_str()).collect()
    }

    #[tokio::test]
    async fn listing_orders() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::in_memory().await?;
        let tolstoy = author(&db, "Tolstoy").await?;
        let austen = author(&db, "Austen").await?;
        book(&db, "War and Peace", "1", tolstoy).await?;
        book(&db, "Emma", "2", austen).await?;

        let order = |order| GetAllBookDto { order };
        let books = db.get_books(order(BookOrder::Unsorted)).await?;
        assert_eq!(titles(&books), ["War and Peace", "Emma"]);
        assert_eq!(books[0].author.name, "Tolstoy");

        let books = db.get_books(order(BookOrder::Title)).await?;
        assert_eq!(titles(&books), ["Emma", "War and Peace"]);

        let books = db.get_books(order(BookOrder::AuthorName)).await?;
        assert_eq!(titles(&books), ["Emma", "War and Peace"]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_search_finds_nothing() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::in_memory().await?;
        let id = author(&db, "Tolstoy").await?;
        book(&db, "War and Peace", "1", id).await?;

        for keyword in [None, Some(String::new())] {
            let books = db.search_books(SearchBookDto { keyword }).await?;
            assert!(books.is_empty());
        }
        let books = db
            .search_books(SearchBookDto {
                keyword: Some("peace".to_string()),
            })
            .await?;
        assert_eq!(titles(&books), ["War and Peace"]);
        Ok(())
    }

    #[tokio::test]
    async fn books_of_an_author() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::in_memory().await?;
        let tolstoy = author(&db, "Tolstoy").await?;
        let austen = author(&db, "Austen").await?;
        book(&db, "War and Peace", "1", tolstoy).await?;
        book(&db, "Emma", "2", austen).await?;
        book(&db, "Anna Karenina", "3", tolstoy).await?;

        let books = db
            .get_books_by_author(GetAuthorBooksDto { author_id: tolstoy })
            .await?;
        let books: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(books, ["War and Peace", "Anna Karenina"]);

        let none = db
            .get_books_by_author(GetAuthorBooksDto { author_id: 99 })
            .await?;
        assert!(none.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn failed_create_leaves_catalog_unchanged() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::in_memory().await?;
        let id = author(&db, "Tolstoy").await?;
        book(&db, "War and Peace", "9780140447934", id).await?;

        let error = book(&db, "Anna Karenina", "9780140447934", id)
            .await
            .expect_err("duplicate isbn");
        assert_eq!(error.current_context(), &KernelError::Conflict);

        let books = db
            .get_books(GetAllBookDto {
                order: BookOrder::Unsorted,
            })
            .await?;
        assert_eq!(titles(&books), ["War and Peace"]);
        Ok(())
    }
}
