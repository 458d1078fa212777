use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction,
};
use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{AuthorBirthDate, AuthorDateOfDeath, AuthorId, AuthorName, NewAuthor};
use kernel::KernelError;

use crate::transfer::{AuthorDto, CreateAuthorDto, GetAuthorDto};

#[async_trait::async_trait]
pub trait GetAuthorService: 'static + Sync + Send + DependOnAuthorQuery {
    async fn get_authors(&self) -> error_stack::Result<Vec<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let authors = self.author_query().find_all(&mut connection).await?;
        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }

    async fn get_author(
        &self,
        dto: GetAuthorDto,
    ) -> error_stack::Result<Option<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = AuthorId::new(dto.id);
        let author = self.author_query().find_by_id(&mut connection, &id).await?;
        Ok(author.map(AuthorDto::from))
    }
}

impl<T> GetAuthorService for T where T: DependOnAuthorQuery {}

#[async_trait::async_trait]
pub trait CreateAuthorService: 'static + Sync + Send + DependOnAuthorModifier {
    async fn create_author(&self, dto: CreateAuthorDto) -> error_stack::Result<i64, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let author = NewAuthor::new(
            AuthorName::new(dto.name),
            dto.birth_date.map(AuthorBirthDate::new),
            dto.date_of_death.map(AuthorDateOfDeath::new),
        );
        let id = self
            .author_modifier()
            .create(&mut connection, &author)
            .await?;
        connection.commit().await?;

        let id: i64 = id.into();
        tracing::debug!(id, "author created");
        Ok(id)
    }
}

impl<T> CreateAuthorService for T where T: DependOnAuthorModifier {}

#[cfg(test)]
mod test {
    use driver::database::SqliteDatabase;
    use kernel::KernelError;
    use time::macros::date;

    use crate::service::{CreateAuthorService, GetAuthorService};
    use crate::transfer::{CreateAuthorDto, GetAuthorDto};

    #[tokio::test]
    async fn create_then_get() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::in_memory().await?;
        let id = db
            .create_author(CreateAuthorDto {
                name: "Jane Austen".to_string(),
                birth_date: Some(date!(1775 - 12 - 16)),
                date_of_death: None,
            })
            .await?;

        let author = db.get_author(GetAuthorDto { id }).await?;
        let author = author.expect("author was just created");
        assert_eq!(author.name, "Jane Austen");
        assert_eq!(author.birth_date, Some(date!(1775 - 12 - 16)));
        assert_eq!(author.date_of_death, None);

        let authors = db.get_authors().await?;
        assert_eq!(authors, vec![author]);
        assert_eq!(db.get_author(GetAuthorDto { id: id + 1 }).await?, None);
        Ok(())
    }
}
