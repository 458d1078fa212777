use vodca::AsRefln;

/// Fragment matched case-insensitively anywhere in a book title.
#[derive(Debug, Clone, Eq, PartialEq, AsRefln)]
pub struct BookTitleKeyword(String);

impl BookTitleKeyword {
    /// Empty or missing input yields no keyword, which searches for nothing.
    pub fn parse(keyword: Option<impl Into<String>>) -> Option<Self> {
        keyword
            .map(Into::into)
            .filter(|keyword: &String| !keyword.is_empty())
            .map(Self)
    }
}
