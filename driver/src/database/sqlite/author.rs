use sqlx::SqliteConnection;
use time::Date;

use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{
    Author, AuthorBirthDate, AuthorDateOfDeath, AuthorId, AuthorName, NewAuthor,
};
use kernel::KernelError;

use crate::database::sqlite::{SqliteDatabase, SqliteTransaction};
use crate::error::ConvertError;

pub struct SqliteAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for SqliteAuthorRepository {
    type Transaction = SqliteTransaction;

    async fn find_all(
        &self,
        con: &mut SqliteTransaction,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        SqliteAuthorInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut SqliteTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        SqliteAuthorInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl AuthorModifier for SqliteAuthorRepository {
    type Transaction = SqliteTransaction;

    async fn create(
        &self,
        con: &mut SqliteTransaction,
        author: &NewAuthor,
    ) -> error_stack::Result<AuthorId, KernelError> {
        SqliteAuthorInternal::create(con, author).await
    }
}

impl DependOnAuthorQuery for SqliteDatabase {
    type AuthorQuery = SqliteAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &SqliteAuthorRepository
    }
}

impl DependOnAuthorModifier for SqliteDatabase {
    type AuthorModifier = SqliteAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &SqliteAuthorRepository
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    birth_date: Option<Date>,
    date_of_death: Option<Date>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author::new(
            AuthorId::new(row.id),
            AuthorName::new(row.name),
            row.birth_date.map(AuthorBirthDate::new),
            row.date_of_death.map(AuthorDateOfDeath::new),
        )
    }
}

pub(in crate::database) struct SqliteAuthorInternal;

impl SqliteAuthorInternal {
    async fn find_all(con: &mut SqliteConnection) -> error_stack::Result<Vec<Author>, KernelError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=sqlite
            r#"
            SELECT id, name, birth_date, date_of_death
            FROM authors
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(
        con: &mut SqliteConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=sqlite
            r#"
            SELECT id, name, birth_date, date_of_death
            FROM authors
            WHERE id = ?
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Author::from))
    }

    async fn create(
        con: &mut SqliteConnection,
        author: &NewAuthor,
    ) -> error_stack::Result<AuthorId, KernelError> {
        let result = sqlx::query(
            // language=sqlite
            r#"
            INSERT INTO authors (name, birth_date, date_of_death)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(author.name().as_ref())
        .bind(author.birth_date().as_ref().map(|date| *AsRef::<Date>::as_ref(date)))
        .bind(
            author
                .date_of_death()
                .as_ref()
                .map(|date| *AsRef::<Date>::as_ref(date)),
        )
        .execute(con)
        .await
        .convert_error()?;
        Ok(AuthorId::new(result.last_insert_rowid()))
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::AuthorQuery;
    use kernel::interface::update::AuthorModifier;
    use kernel::prelude::entity::{
        AuthorBirthDate, AuthorDateOfDeath, AuthorId, AuthorName, NewAuthor,
    };
    use kernel::KernelError;

    use crate::database::sqlite::{SqliteAuthorRepository, SqliteDatabase};

    #[tokio::test]
    async fn name_only() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::in_memory().await?;
        let mut con = db.transact().await?;

        let author = NewAuthor::new(AuthorName::new("Leo Tolstoy"), None, None);
        let id = SqliteAuthorRepository.create(&mut con, &author).await?;

        let found = SqliteAuthorRepository
            .find_by_id(&mut con, &id)
            .await?
            .expect("author was just created");
        assert_eq!(found.id(), &id);
        assert_eq!(found.name(), author.name());
        assert_eq!(found.birth_date(), &None);
        assert_eq!(found.date_of_death(), &None);
        Ok(())
    }

    #[tokio::test]
    async fn dates_round_trip() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::in_memory().await?;
        let mut con = db.transact().await?;

        let author = NewAuthor::new(
            AuthorName::new("Leo Tolstoy"),
            Some(AuthorBirthDate::new(date!(1828 - 09 - 09))),
            Some(AuthorDateOfDeath::new(date!(1910 - 11 - 20))),
        );
        let id = SqliteAuthorRepository.create(&mut con, &author).await?;

        let found = SqliteAuthorRepository.find_by_id(&mut con, &id).await?;
        let found = found.expect("author was just created");
        assert_eq!(found.birth_date(), author.birth_date());
        assert_eq!(found.date_of_death(), author.date_of_death());
        Ok(())
    }

    #[tokio::test]
    async fn find_all_in_insertion_order() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::in_memory().await?;
        let mut con = db.transact().await?;

        for name in ["Tolstoy", "Austen", "Melville"] {
            let author = NewAuthor::new(AuthorName::new(name), None, None);
            SqliteAuthorRepository.create(&mut con, &author).await?;
        }

        let names = SqliteAuthorRepository
            .find_all(&mut con)
            .await?
            .iter()
            .map(|author| author.name().as_ref().clone())
            .collect::<Vec<String>>();
        assert_eq!(names, ["Tolstoy", "Austen", "Melville"]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_none() -> error_stack::Result<(), KernelError> {
        let db = SqliteDatabase::in_memory().await?;
        let mut con = db.transact().await?;
        let found = SqliteAuthorRepository
            .find_by_id(&mut con, &AuthorId::new(42))
            .await?;
        assert!(found.is_none());
        Ok(())
    }
}
