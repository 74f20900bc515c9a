//! Conversión de valores crudos al tipo de cada parámetro.
//!
//! Orden de decisión:
//! 1. conversor explícito declarado en el parámetro (si existe);
//! 2. identidad, si el valor ya es asignable al tipo destino;
//! 3. reglas implícitas registradas por tipo destino.

mod explicit;
mod implicit;
mod service;
mod typed;

pub use explicit::ArgumentConverter;
pub use implicit::decode_integer;
pub use service::{is_assignable, ConversionService, StringFactory};
pub use typed::ArgumentType;
