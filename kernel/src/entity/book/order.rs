/// Ordering of a full catalog listing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum BookOrder {
    Title,
    AuthorName,
    /// Store insertion order.
    #[default]
    Unsorted,
}

impl BookOrder {
    pub fn from_key(key: &str) -> Self {
        match key {
            "title" => Self::Title,
            "author" => Self::AuthorName,
            _unrecognized => Self::Unsorted,
        }
    }
}

#[cfg(test)]
mod test {
    use super::BookOrder;

    #[test]
    fn known_keys() {
        assert_eq!(BookOrder::from_key("title"), BookOrder::Title);
        assert_eq!(BookOrder::from_key("author"), BookOrder::AuthorName);
    }

    #[test]
    fn unknown_key_falls_back_to_unsorted() {
        assert_eq!(BookOrder::from_key("unknown"), BookOrder::Unsorted);
        assert_eq!(BookOrder::from_key("Title"), BookOrder::Unsorted);
        assert_eq!(BookOrder::from_key(""), BookOrder::Unsorted);
    }
}
