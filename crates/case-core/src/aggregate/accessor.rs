use std::fmt;
use std::sync::Arc;

use crate::convert::{ArgumentType, ConversionService};
use crate::errors::AggregationError;
use crate::model::{ArgValue, ArgumentRow, TargetType};

/// Acceso de solo lectura a una fila completa, con conversión bajo demanda.
///
/// Los fallos se atribuyen siempre al índice de la fila.
#[derive(Clone)]
pub struct ArgumentsAccessor {
    row: ArgumentRow,
    conversions: Arc<ConversionService>,
}

impl ArgumentsAccessor {
    pub fn new(row: ArgumentRow, conversions: Arc<ConversionService>) -> Self {
        Self { row, conversions }
    }

    pub fn row_index(&self) -> usize {
        self.row.index()
    }

    pub fn len(&self) -> usize {
        self.row.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn values(&self) -> &[ArgValue] {
        self.row.values()
    }

    /// Valor crudo en `index`.
    pub fn get(&self, index: usize) -> Result<&ArgValue, AggregationError> {
        self.row.get(index).ok_or(AggregationError::IndexOutOfBounds { row_index: self.row.index(),
                                                                        slot: None,
                                                                        index,
                                                                        len: self.row.len() })
    }

    /// Valor en `index` convertido implícitamente a `target`.
    pub fn get_as(&self, index: usize, target: &TargetType) -> Result<ArgValue, AggregationError> {
        let raw = self.get(index)?;
        self.conversions
            .convert(raw, target)
            .map_err(|source| AggregationError::Conversion { row_index: self.row.index(), slot: None, source })
    }

    /// Valor en `index` convertido y extraído como `T`.
    pub fn get_typed<T: ArgumentType>(&self, index: usize) -> Result<T, AggregationError> {
        let target = T::target_type();
        let value = self.get_as(index, &target)?;
        T::from_value(&value).map_err(|reason| AggregationError::Conversion {
                                 row_index: self.row.index(),
                                 slot: None,
                                 source: crate::errors::ConversionError::new(&value, &target, reason),
                             })
    }

    pub fn get_string(&self, index: usize) -> Result<Option<String>, AggregationError> {
        self.get_typed(index)
    }

    pub fn get_integer(&self, index: usize) -> Result<i32, AggregationError> {
        self.get_typed(index)
    }

    pub fn get_long(&self, index: usize) -> Result<i64, AggregationError> {
        self.get_typed(index)
    }

    pub fn get_double(&self, index: usize) -> Result<f64, AggregationError> {
        self.get_typed(index)
    }

    pub fn get_boolean(&self, index: usize) -> Result<bool, AggregationError> {
        self.get_typed(index)
    }

    pub fn get_character(&self, index: usize) -> Result<char, AggregationError> {
        self.get_typed(index)
    }

    pub fn to_vec(&self) -> Vec<ArgValue> {
        self.row.values().to_vec()
    }
}

impl fmt::Debug for ArgumentsAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentsAccessor").field("row", &self.row).finish()
    }
}

impl fmt::Display for ArgumentsAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accessor() -> ArgumentsAccessor {
        let row = ArgumentRow::new(2,
                                   vec![ArgValue::from("Jane"), ArgValue::from("Doe"), ArgValue::from("F"), ArgValue::from("42"), ArgValue::Null]);
        ArgumentsAccessor::new(row, Arc::new(ConversionService::default()))
    }

    #[test]
    fn reads_and_converts_on_demand() {
        let a = accessor();
        assert_eq!(a.len(), 5);
        assert_eq!(a.get_string(0).ok().flatten().as_deref(), Some("Jane"));
        assert_eq!(a.get_integer(3).ok(), Some(42));
        assert_eq!(a.get_long(3).ok(), Some(42));
        assert_eq!(a.get_double(3).ok(), Some(42.0));
        assert_eq!(a.get_character(2).ok(), Some('F'));
        assert_eq!(a.get_string(4).ok(), Some(None));
    }

    #[test]
    fn failures_carry_the_row_index() {
        let a = accessor();
        match a.get(9) {
            Err(AggregationError::IndexOutOfBounds { row_index, index, len, .. }) => assert_eq!((row_index, index, len), (2, 9, 5)),
            other => panic!("unexpected {other:?}"),
        }
        match a.get_integer(0) {
            Err(AggregationError::Conversion { row_index, source, .. }) => {
                assert_eq!(row_index, 2);
                assert_eq!(source.target, TargetType::Int);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(a.get_boolean(4).is_err());
    }
}
