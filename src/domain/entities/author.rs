//! Author entity.

use serde::Serialize;

/// A catalog author.
///
/// `book_count` is derived by counting the author's books at read time; it
/// is never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub book_count: i64,
}

impl Author {
    /// Creates a new Author instance.
    pub fn new(id: i64, name: String, book_count: i64) -> Self {
        Self {
            id,
            name,
            book_count,
        }
    }

    /// Splits the stored full name back into `(first, last)` for edit forms.
    ///
    /// Everything after the first space belongs to the last name; an author
    /// stored without a space has an empty last name.
    pub fn name_parts(&self) -> (&str, &str) {
        match self.name.split_once(' ') {
            Some((first, last)) => (first, last),
            None => (self.name.as_str(), ""),
        }
    }
}

/// Input data for creating or updating an author.
///
/// Holds the already-trimmed form fields; the full stored name is
/// `"{first} {last}"`.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
}

impl NewAuthor {
    /// Builds the input from raw form fields, trimming surrounding
    /// whitespace.
    pub fn from_parts(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        }
    }

    /// The full name as stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parts() {
        let author = Author::new(1, "John Smith".to_string(), 0);
        assert_eq!(author.name_parts(), ("John", "Smith"));
    }

    #[test]
    fn test_name_parts_multi_word_last_name() {
        let author = Author::new(1, "Ursula K. Le Guin".to_string(), 0);
        assert_eq!(author.name_parts(), ("Ursula", "K. Le Guin"));
    }

    #[test]
    fn test_name_parts_single_word() {
        let author = Author::new(1, "Homer".to_string(), 0);
        assert_eq!(author.name_parts(), ("Homer", ""));
    }

    #[test]
    fn test_new_author_trims_and_joins() {
        let new_author = NewAuthor::from_parts("  John ", " Smith  ");
        assert_eq!(new_author.first_name, "John");
        assert_eq!(new_author.last_name, "Smith");
        assert_eq!(new_author.full_name(), "John Smith");
    }
}
