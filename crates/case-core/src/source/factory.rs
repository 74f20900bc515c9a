use std::error::Error;
use std::sync::Arc;

use crate::model::{ArgValue, Arguments};

/// Elemento producido por una factory: un valor escalar (fila de un valor) o
/// una fila ya construida.
#[derive(Debug, Clone, PartialEq)]
pub enum FactoryItem {
    Value(ArgValue),
    Row(Arguments),
}

impl FactoryItem {
    pub fn row<I, V>(values: I) -> Self
        where I: IntoIterator<Item = V>,
              V: Into<ArgValue>
    {
        FactoryItem::Row(values.into_iter().map(Into::into).collect())
    }

    pub(crate) fn into_arguments(self) -> Arguments {
        match self {
            FactoryItem::Value(v) => vec![v],
            FactoryItem::Row(values) => values,
        }
    }
}

macro_rules! scalar_items {
    ($($ty:ty),+) => {
        $(impl From<$ty> for FactoryItem {
            fn from(value: $ty) -> Self {
                FactoryItem::Value(value.into())
            }
        })+
    };
}

scalar_items!(ArgValue, &str, String, bool, i32, i64, f64, char);

// Un vector de valores es una fila completa; para una lista como único
// argumento usar `ArgValue::List`.
impl From<Arguments> for FactoryItem {
    fn from(values: Arguments) -> Self {
        FactoryItem::Row(values)
    }
}

/// Resultado de invocar una factory.
pub enum FactoryOutput {
    Single(FactoryItem),
    Array(Vec<FactoryItem>),
    /// Secuencia perezosa, posiblemente infinita.
    Stream(Box<dyn Iterator<Item = FactoryItem>>),
}

impl FactoryOutput {
    pub fn single(item: impl Into<FactoryItem>) -> Self {
        FactoryOutput::Single(item.into())
    }

    pub fn array<I, T>(items: I) -> Self
        where I: IntoIterator<Item = T>,
              T: Into<FactoryItem>
    {
        FactoryOutput::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn stream<I, T>(items: I) -> Self
        where I: IntoIterator<Item = T>,
              I::IntoIter: 'static,
              T: Into<FactoryItem> + 'static
    {
        FactoryOutput::Stream(Box::new(items.into_iter().map(Into::into)))
    }

    pub(crate) fn into_rows(self) -> Box<dyn Iterator<Item = Arguments>> {
        match self {
            FactoryOutput::Single(item) => Box::new(std::iter::once(item.into_arguments())),
            FactoryOutput::Array(items) => Box::new(items.into_iter().map(FactoryItem::into_arguments)),
            FactoryOutput::Stream(items) => Box::new(items.map(FactoryItem::into_arguments)),
        }
    }
}

/// Error devuelto por factories y providers de usuario.
pub type UserError = Box<dyn Error + Send + Sync>;

/// Factory sin argumentos registrada por nombre.
pub type Factory = Arc<dyn Fn() -> Result<FactoryOutput, UserError> + Send + Sync>;
