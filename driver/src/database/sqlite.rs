use std::num::NonZeroU32;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use error_stack::ResultExt;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, SqliteConnection};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{author::*, book::*};

mod author;
mod book;

static SQLITE_URL: &str = "SQLITE_URL";
static SQLITE_MAX_CONNECTIONS: &str = "SQLITE_MAX_CONNECTIONS";

const DEFAULT_URL: &str = "sqlite://bookshelf.sqlite";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub struct SqliteDatabase {
    pool: Pool<Sqlite>,
}

impl SqliteDatabase {
    /// Opens the database file named by `SQLITE_URL`, creating it and its tables when absent.
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(SQLITE_URL)?.unwrap_or_else(|| DEFAULT_URL.to_string());
        let max_connections = match env(SQLITE_MAX_CONNECTIONS)? {
            Some(value) => parse_max_connections(&value)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let options = SqliteConnectOptions::from_str(&url)
            .convert_error()?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .convert_error()?;
        tracing::info!(url = %url, max_connections, "connected to sqlite");

        Self::migrate(pool).await
    }

    /// Private in-memory database. The pool keeps exactly one connection alive,
    /// since every sqlite connection to `:memory:` opens a separate database.
    pub async fn in_memory() -> error_stack::Result<Self, KernelError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .convert_error()?
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .convert_error()?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: Pool<Sqlite>) -> error_stack::Result<Self, KernelError> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .convert_error()?;
        tracing::debug!("sqlite schema is up to date");
        Ok(Self { pool })
    }
}

fn parse_max_connections(value: &str) -> error_stack::Result<u32, KernelError> {
    value
        .parse::<NonZeroU32>()
        .map(NonZeroU32::get)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| {
            format!("{SQLITE_MAX_CONNECTIONS} must be a positive integer: {value}")
        })
}

#[async_trait::async_trait]
impl DatabaseConnection for SqliteDatabase {
    type Transaction = SqliteTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(SqliteTransaction(transaction))
    }
}

pub struct SqliteTransaction(sqlx::Transaction<'static, Sqlite>);

impl Deref for SqliteTransaction {
    type Target = SqliteConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SqliteTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for SqliteTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}
