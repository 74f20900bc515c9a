//! Valores que circulan entre fuentes, conversión y casos.
//!
//! `ArgValue` representa tanto el valor crudo producido por una fuente como el
//! valor ya convertido/agregado que recibe el cuerpo de un caso. Es inmutable
//! una vez construido; clonar es barato salvo para `Str` y `List`.
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::constants::ARGUMENTS_SEPARATOR;

/// Miembro de una enumeración registrada.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumMember {
    pub enum_name: Arc<str>,
    pub name: Arc<str>,
    pub ordinal: usize,
}

/// Objeto opaco (resultado de un agregador o de una factory de strings).
///
/// Guarda el nombre de tipo declarado y su forma textual para poder
/// renderizar nombres sin conocer el tipo concreto.
#[derive(Clone)]
pub struct Opaque {
    type_name: Arc<str>,
    display: Arc<str>,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    pub fn new<T>(type_name: impl Into<Arc<str>>, value: T) -> Self
        where T: Any + Send + Sync + fmt::Display
    {
        Self { type_name: type_name.into(),
               display: value.to_string().into(),
               inner: Arc::new(value) }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name, self.display)
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

// Igualdad por tipo declarado y forma textual: el contenido es opaco.
impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.display == other.display
    }
}

/// Valor crudo o ligado.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
    Enum(EnumMember),
    Date(NaiveDate),
    List(Vec<ArgValue>),
    Object(Opaque),
}

impl ArgValue {
    /// Construye una lista a partir de cualquier colección convertible.
    pub fn list<I, V>(items: I) -> Self
        where I: IntoIterator<Item = V>,
              V: Into<ArgValue>
    {
        ArgValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn object<T>(type_name: impl Into<Arc<str>>, value: T) -> Self
        where T: Any + Send + Sync + fmt::Display
    {
        ArgValue::Object(Opaque::new(type_name, value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Forma usada en mensajes de error: los strings van entre comillas para
    /// distinguir `"1"` de `1`.
    pub fn describe(&self) -> String {
        match self {
            ArgValue::Str(s) => format!("{s:?}"),
            ArgValue::Char(c) => format!("{c:?}"),
            other => other.to_string(),
        }
    }

    /// Etiqueta del tipo en tiempo de ejecución.
    pub fn type_label(&self) -> String {
        match self {
            ArgValue::Null => "null".into(),
            ArgValue::Bool(_) => "bool".into(),
            ArgValue::Int(_) => "i64".into(),
            ArgValue::Float(_) => "f64".into(),
            ArgValue::Char(_) => "char".into(),
            ArgValue::Str(_) => "String".into(),
            ArgValue::Enum(m) => m.enum_name.to_string(),
            ArgValue::Date(_) => "NaiveDate".into(),
            ArgValue::List(_) => "Vec".into(),
            ArgValue::Object(o) => o.type_name().to_string(),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Null => f.write_str("null"),
            ArgValue::Bool(b) => write!(f, "{b}"),
            ArgValue::Int(i) => write!(f, "{i}"),
            // `{:?}` conserva el `.0` de los valores enteros: `1.0`, no `1`
            ArgValue::Float(x) => write!(f, "{x:?}"),
            ArgValue::Char(c) => write!(f, "{c}"),
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Enum(m) => f.write_str(&m.name),
            ArgValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            ArgValue::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(ARGUMENTS_SEPARATOR))
            }
            ArgValue::Object(o) => write!(f, "{o}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value.into())
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<char> for ArgValue {
    fn from(value: char) -> Self {
        ArgValue::Char(value)
    }
}

impl From<NaiveDate> for ArgValue {
    fn from(value: NaiveDate) -> Self {
        ArgValue::Date(value)
    }
}

impl From<EnumMember> for ArgValue {
    fn from(value: EnumMember) -> Self {
        ArgValue::Enum(value)
    }
}

impl From<Opaque> for ArgValue {
    fn from(value: Opaque) -> Self {
        ArgValue::Object(value)
    }
}

impl From<Vec<ArgValue>> for ArgValue {
    fn from(value: Vec<ArgValue>) -> Self {
        ArgValue::List(value)
    }
}

impl<T: Into<ArgValue>> From<Option<T>> for ArgValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ArgValue::Null)
    }
}
