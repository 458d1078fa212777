use kernel::prelude::entity::{Author, DestructAuthor};
use time::Date;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<Date>,
    pub date_of_death: Option<Date>,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let DestructAuthor {
            id,
            name,
            birth_date,
            date_of_death,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            birth_date: birth_date.map(Into::into),
            date_of_death: date_of_death.map(Into::into),
        }
    }
}

pub struct GetAuthorDto {
    pub id: i64,
}

pub struct CreateAuthorDto {
    pub name: String,
    pub birth_date: Option<Date>,
    pub date_of_death: Option<Date>,
}
