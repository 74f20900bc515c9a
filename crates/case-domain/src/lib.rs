// case-domain library entry point
pub mod book;
pub mod converter;
pub mod enums;
pub mod error;
pub mod generator;
pub mod person;
pub mod strings;
pub use book::Book;
pub use converter::ToStringConverter;
pub use enums::{Gender, Rank, TemporalUnit};
pub use error::DomainError;
pub use generator::EvenNumbersGenerator;
pub use person::{Person, PersonAggregator};
pub use strings::is_palindrome;
