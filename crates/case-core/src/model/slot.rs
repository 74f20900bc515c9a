//! Parámetros formales de una acción de prueba.
use std::fmt;
use std::sync::Arc;

use crate::aggregate::ArgumentsAggregator;
use crate::convert::ArgumentConverter;

/// Tipo destino de un parámetro.
///
/// `Bool`, `Char`, `Int`, `Long` y `Double` son no anulables: un `null`
/// crudo falla al convertirse a ellos.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    Bool,
    Char,
    Int,
    Long,
    Double,
    Str,
    Enum(String),
    Date,
    List,
    Object(String),
    Any,
}

impl TargetType {
    pub fn is_primitive(&self) -> bool {
        matches!(self, TargetType::Bool | TargetType::Char | TargetType::Int | TargetType::Long | TargetType::Double)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Bool => f.write_str("bool"),
            TargetType::Char => f.write_str("char"),
            TargetType::Int => f.write_str("i32"),
            TargetType::Long => f.write_str("i64"),
            TargetType::Double => f.write_str("f64"),
            TargetType::Str => f.write_str("String"),
            TargetType::Enum(name) | TargetType::Object(name) => f.write_str(name),
            TargetType::Date => f.write_str("NaiveDate"),
            TargetType::List => f.write_str("Vec"),
            TargetType::Any => f.write_str("Any"),
        }
    }
}

/// Cómo obtiene su valor un parámetro.
#[derive(Clone)]
pub enum SlotKind {
    /// Toma el valor de su posición, con conversor explícito opcional.
    Positional { converter: Option<Arc<dyn ArgumentConverter>> },
    /// Consume la fila completa mediante un agregador reutilizado en todas
    /// las filas de la fuente.
    Aggregate(Arc<dyn ArgumentsAggregator>),
    /// Recibe un `ArgumentsAccessor` para lecturas ad-hoc.
    Accessor,
}

/// Nombre de tipo con el que se expone un `ArgumentsAccessor` ligado.
pub const ACCESSOR_TYPE_NAME: &str = "ArgumentsAccessor";

/// Parámetro formal: tipo destino + conversor o agregador opcional.
#[derive(Clone)]
pub struct ParameterSlot {
    target: TargetType,
    kind: SlotKind,
}

impl ParameterSlot {
    /// Parámetro posicional con conversión implícita.
    pub fn of(target: TargetType) -> Self {
        Self { target, kind: SlotKind::Positional { converter: None } }
    }

    /// Parámetro posicional con conversor explícito (tiene precedencia sobre
    /// las reglas implícitas).
    pub fn converted(target: TargetType, converter: impl ArgumentConverter + 'static) -> Self {
        Self { target, kind: SlotKind::Positional { converter: Some(Arc::new(converter)) } }
    }

    /// Parámetro agregado. Pasar el mismo `Arc` a varios tests reutiliza la
    /// instancia del agregador.
    pub fn aggregated(target: TargetType, aggregator: Arc<dyn ArgumentsAggregator>) -> Self {
        Self { target, kind: SlotKind::Aggregate(aggregator) }
    }

    pub fn accessor() -> Self {
        Self { target: TargetType::Object(ACCESSOR_TYPE_NAME.to_string()), kind: SlotKind::Accessor }
    }

    pub fn target(&self) -> &TargetType {
        &self.target
    }

    pub fn kind(&self) -> &SlotKind {
        &self.kind
    }

    /// `true` si el parámetro consume la fila completa.
    pub fn consumes_row(&self) -> bool {
        !matches!(self.kind, SlotKind::Positional { .. })
    }
}

impl fmt::Debug for ParameterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            SlotKind::Positional { converter: None } => "implicit",
            SlotKind::Positional { converter: Some(_) } => "explicit",
            SlotKind::Aggregate(_) => "aggregate",
            SlotKind::Accessor => "accessor",
        };
        f.debug_struct("ParameterSlot").field("target", &self.target).field("kind", &kind).finish()
    }
}
