use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::trace;

use super::{implicit, ArgumentConverter};
use crate::errors::ConversionError;
use crate::model::{ArgValue, EnumRegistry, Opaque, TargetType};

/// Factory `&str -> objeto` usada como fallback para tipos arbitrarios que
/// se construyen a partir de un único string.
pub type StringFactory = Arc<dyn Fn(&str) -> Result<Opaque, String> + Send + Sync>;

/// Registro de reglas de conversión implícita.
///
/// Comparte el `EnumRegistry` con el resolver de fuentes para que
/// `String -> Enum` y `EnumValues` vean las mismas enumeraciones.
#[derive(Clone, Default)]
pub struct ConversionService {
    enums: Arc<EnumRegistry>,
    factories: HashMap<String, StringFactory>,
}

impl ConversionService {
    pub fn new(enums: Arc<EnumRegistry>) -> Self {
        Self { enums, factories: HashMap::new() }
    }

    /// Registra una factory de strings para `TargetType::Object(type_name)`.
    pub fn with_string_factory<F>(mut self, type_name: impl Into<String>, factory: F) -> Self
        where F: Fn(&str) -> Result<Opaque, String> + Send + Sync + 'static
    {
        self.register_string_factory(type_name, Arc::new(factory));
        self
    }

    pub fn register_string_factory(&mut self, type_name: impl Into<String>, factory: StringFactory) -> &mut Self {
        self.factories.insert(type_name.into(), factory);
        self
    }

    pub fn enums(&self) -> &EnumRegistry {
        &self.enums
    }

    pub(crate) fn string_factory(&self, type_name: &str) -> Option<&StringFactory> {
        self.factories.get(type_name)
    }

    /// Conversión implícita (identidad o reglas registradas).
    pub fn convert(&self, raw: &ArgValue, target: &TargetType) -> Result<ArgValue, ConversionError> {
        if raw.is_null() {
            return if target.is_primitive() {
                Err(ConversionError::new(raw, target, "null cannot be assigned to a non-nullable type"))
            } else {
                Ok(ArgValue::Null)
            };
        }
        if is_assignable(raw, target) {
            return Ok(raw.clone());
        }
        trace!("implicit conversion of {} to {}", raw.describe(), target);
        implicit::convert(self, raw, target).map_err(|reason| ConversionError::new(raw, target, reason))
    }

    /// Conversión con conversor explícito opcional, que tiene precedencia
    /// sobre las reglas implícitas.
    pub fn convert_with(&self,
                        raw: &ArgValue,
                        target: &TargetType,
                        converter: Option<&dyn ArgumentConverter>)
                        -> Result<ArgValue, ConversionError> {
        match converter {
            Some(c) => c.convert(raw, target).map_err(|reason| ConversionError::new(raw, target, reason)),
            None => self.convert(raw, target),
        }
    }
}

impl fmt::Debug for ConversionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut factories: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        factories.sort_unstable();
        f.debug_struct("ConversionService")
         .field("enums", &self.enums.names().collect::<Vec<_>>())
         .field("string_factories", &factories)
         .finish()
    }
}

/// `true` si `value` puede entregarse tal cual a un parámetro de tipo
/// `target`.
pub fn is_assignable(value: &ArgValue, target: &TargetType) -> bool {
    match (value, target) {
        (_, TargetType::Any) => true,
        (ArgValue::Null, t) => !t.is_primitive(),
        (ArgValue::Bool(_), TargetType::Bool)
        | (ArgValue::Char(_), TargetType::Char)
        | (ArgValue::Str(_), TargetType::Str)
        | (ArgValue::Float(_), TargetType::Double)
        | (ArgValue::Date(_), TargetType::Date)
        | (ArgValue::List(_), TargetType::List)
        | (ArgValue::Int(_), TargetType::Long) => true,
        (ArgValue::Int(v), TargetType::Int) => i32::try_from(*v).is_ok(),
        (ArgValue::Enum(m), TargetType::Enum(name)) => &*m.enum_name == name,
        (ArgValue::Object(o), TargetType::Object(name)) => o.type_name() == name,
        _ => false,
    }
}
