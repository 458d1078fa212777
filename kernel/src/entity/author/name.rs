use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct AuthorName(String);

impl AuthorName {
    pub const MAX_LENGTH: usize = 100;

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
