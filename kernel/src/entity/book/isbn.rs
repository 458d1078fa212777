use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookIsbn(String);

impl BookIsbn {
    pub const MAX_LENGTH: usize = 13;

    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }
}
