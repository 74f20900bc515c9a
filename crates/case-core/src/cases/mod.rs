//! Builders de alto nivel: casos parametrizados, repetidos y clases de
//! prueba. Validan la declaración al construir y producen contenedores con
//! hijos perezosos.

pub mod class;
pub mod parameterized;
pub mod repeated;

pub use class::TestClass;
pub use parameterized::{CaseBody, ParameterizedTest};
pub use repeated::{RepeatedTest, RepetitionBody};

use crate::errors::SourceError;

pub(crate) fn invalid(kind: &'static str, reason: impl Into<String>) -> SourceError {
    SourceError::InvalidConfiguration { kind, reason: reason.into() }
}
