use std::fmt;

use case_core::Opaque;

use crate::DomainError;

/// Libro construible desde su título.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
}

impl Book {
    pub const TYPE_NAME: &'static str = "Book";

    pub fn from_title(title: &str) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::ValidationError("a book needs a title".to_string()));
        }
        Ok(Book { title: title.to_string() })
    }

    pub fn title(&self) -> &str { &self.title }

    /// Factory de strings para registrar en el motor bajo `TYPE_NAME`.
    pub fn string_factory(title: &str) -> Result<Opaque, String> {
        Book::from_title(title).map(|book| Opaque::new(Self::TYPE_NAME, book)).map_err(|e| e.to_string())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
