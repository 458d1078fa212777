use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPublicationYear(i32);

impl BookPublicationYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}
