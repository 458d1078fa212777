use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct AuthorBirthDate(Date);

impl AuthorBirthDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
