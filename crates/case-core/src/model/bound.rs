use std::any::Any;

use super::{ArgValue, TargetType};
use crate::aggregate::ArgumentsAccessor;
use crate::convert::ArgumentType;
use crate::errors::ConversionError;

/// Resultado de ligar una fila contra los parámetros declarados: un valor
/// por parámetro y el índice de la fila de origen (para el nombre del caso).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArguments {
    index: usize,
    values: Vec<ArgValue>,
}

impl BoundArguments {
    pub fn new(index: usize, values: Vec<ArgValue>) -> Self {
        Self { index, values }
    }

    /// Índice (base 1) de la fila de origen.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn values(&self) -> &[ArgValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&ArgValue> {
        self.values.get(position)
    }

    /// Extrae el valor ligado en `position` como `T`.
    pub fn value<T: ArgumentType>(&self, position: usize) -> Result<T, ConversionError> {
        let value = self.require(position, &T::target_type())?;
        T::from_value(value).map_err(|reason| ConversionError::new(value, &T::target_type(), reason).at(self.index, position))
    }

    /// Referencia tipada a un objeto opaco ligado (agregadores, factories de
    /// strings, accessors).
    pub fn object<T: Any>(&self, position: usize) -> Result<&T, ConversionError> {
        let expected = TargetType::Object(std::any::type_name::<T>().to_string());
        let value = self.require(position, &expected)?;
        match value {
            ArgValue::Object(o) => o.downcast_ref::<T>().ok_or_else(|| {
                ConversionError::new(value, &expected, format!("bound object is a {}", o.type_name())).at(self.index, position)
            }),
            other => Err(ConversionError::new(other, &expected, "bound value is not an object").at(self.index, position)),
        }
    }

    /// Accessor ligado a un parámetro declarado con `ParameterSlot::accessor()`.
    pub fn accessor(&self, position: usize) -> Result<&ArgumentsAccessor, ConversionError> {
        self.object::<ArgumentsAccessor>(position)
    }

    fn require(&self, position: usize, target: &TargetType) -> Result<&ArgValue, ConversionError> {
        self.values.get(position).ok_or_else(|| {
            ConversionError::new(&ArgValue::Null, target, format!("no bound argument at position {position} ({} bound)", self.values.len()))
                .at(self.index, position)
        })
    }
}

/// Repetición actual y total de un caso repetido.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepetitionInfo {
    pub current: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_extraction_attributes_failures() {
        let bound = BoundArguments::new(4, vec![ArgValue::from("apple"), ArgValue::from(1)]);
        assert_eq!(bound.value::<String>(0).ok().as_deref(), Some("apple"));
        assert_eq!(bound.value::<i32>(1).ok(), Some(1));

        let err = bound.value::<i32>(0).expect_err("string is not an i32");
        assert_eq!(err.row_index, Some(4));
        assert_eq!(err.slot, Some(0));

        let missing = bound.value::<String>(5).expect_err("out of range");
        assert!(missing.reason.contains("position 5"));
    }

    #[test]
    fn object_downcast_checks_the_type() {
        let bound = BoundArguments::new(1, vec![ArgValue::object("Title", String::from("Dune"))]);
        assert_eq!(bound.object::<String>(0).map(String::as_str).ok(), Some("Dune"));
        assert!(bound.object::<u8>(0).is_err());
    }
}
