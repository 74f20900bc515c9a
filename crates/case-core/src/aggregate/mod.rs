//! Agregación de filas completas en un único valor.
//!
//! Dos patrones de acceso:
//! - `ArgumentsAccessor`: el cuerpo del caso lee índices/tipos bajo demanda.
//! - `ArgumentsAggregator`: objeto ligado a un parámetro y reutilizado en
//!   todas las filas de la fuente.

mod accessor;
mod aggregator;

pub use accessor::ArgumentsAccessor;
pub use aggregator::{ArgumentsAggregator, SlotContext};
