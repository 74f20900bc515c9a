use super::ArgumentsAccessor;
use crate::errors::AggregationError;
use crate::model::{ArgValue, TargetType};

/// Parámetro para el que se está agregando la fila.
#[derive(Debug, Clone, Copy)]
pub struct SlotContext<'a> {
    pub position: usize,
    pub target: &'a TargetType,
}

/// Agregador declarado en un parámetro. Una instancia se reutiliza en todas
/// las filas, por lo que no debe depender del orden de invocación.
pub trait ArgumentsAggregator: Send + Sync {
    fn aggregate(&self, accessor: &ArgumentsAccessor, slot: &SlotContext<'_>) -> Result<ArgValue, AggregationError>;
}

impl<F> ArgumentsAggregator for F
    where F: Fn(&ArgumentsAccessor, &SlotContext<'_>) -> Result<ArgValue, AggregationError> + Send + Sync
{
    fn aggregate(&self, accessor: &ArgumentsAccessor, slot: &SlotContext<'_>) -> Result<ArgValue, AggregationError> {
        self(accessor, slot)
    }
}
