use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{AuthorId, Book, BookTitleKeyword, BookWithAuthor};
use crate::KernelError;

/// Every listing resolves each book's author.
#[async_trait::async_trait]
pub trait BookQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Insertion order.
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError>;
    async fn find_all_order_by_title(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError>;
    async fn find_all_order_by_author_name(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError>;
    async fn find_by_title_keyword(
        &self,
        con: &mut Self::Transaction,
        keyword: &BookTitleKeyword,
    ) -> error_stack::Result<Vec<BookWithAuthor>, KernelError>;
    async fn find_by_author_id(
        &self,
        con: &mut Self::Transaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn count(&self, con: &mut Self::Transaction) -> error_stack::Result<i64, KernelError>;
}

pub trait DependOnBookQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookQuery: BookQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_query(&self) -> &Self::BookQuery;
}
