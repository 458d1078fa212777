mod birth_date;
mod date_of_death;
mod id;
mod name;

pub use self::{birth_date::*, date_of_death::*, id::*, name::*};
use destructure::Destructure;
use std::fmt::{Display, Formatter};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    birth_date: Option<AuthorBirthDate>,
    date_of_death: Option<AuthorDateOfDeath>,
}

impl Author {
    pub fn new(
        id: AuthorId,
        name: AuthorName,
        birth_date: Option<AuthorBirthDate>,
        date_of_death: Option<AuthorDateOfDeath>,
    ) -> Self {
        Self {
            id,
            name,
            birth_date,
            date_of_death,
        }
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(AsRef::<String>::as_ref(&self.name))
    }
}

/// An author that has not been stored yet, so it has no id.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct NewAuthor {
    name: AuthorName,
    birth_date: Option<AuthorBirthDate>,
    date_of_death: Option<AuthorDateOfDeath>,
}

impl NewAuthor {
    pub fn new(
        name: AuthorName,
        birth_date: Option<AuthorBirthDate>,
        date_of_death: Option<AuthorDateOfDeath>,
    ) -> Self {
        Self {
            name,
            birth_date,
            date_of_death,
        }
    }
}
