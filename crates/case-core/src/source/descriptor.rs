//! Descriptores declarativos de fuentes de argumentos.
//!
//! Un `SourceDescriptor` es inmutable y serializable (JSON etiquetado por
//! `kind`), de modo que las suites pueden declararse como datos:
//!
//! ```json
//! { "kind": "csv_inline", "lines": ["apple, 1"], "format": { "delimiter": "|" } }
//! ```
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::csv;
use crate::constants::{DEFAULT_CSV_DELIMITER, QUOTE};
use crate::errors::SourceError;
use crate::model::ArgValue;

/// Literal declarado en una fuente `InlineValues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Literal {
    fn kind(&self) -> &'static str {
        match self {
            Literal::Bool(_) => "boolean",
            Literal::Int(_) => "integer",
            Literal::Float(_) => "double",
            Literal::Str(_) => "string",
        }
    }
}

impl From<&Literal> for ArgValue {
    fn from(value: &Literal) -> Self {
        match value {
            Literal::Bool(b) => ArgValue::Bool(*b),
            Literal::Int(i) => ArgValue::Int(*i),
            Literal::Float(x) => ArgValue::Float(*x),
            Literal::Str(s) => ArgValue::Str(s.clone()),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value.into())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Literal::Str(value.to_string())
    }
}

/// Formato de las fuentes CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvFormat {
    pub delimiter: char,
    /// Tokens literales que se interpretan como `null`.
    pub null_values: Vec<String>,
    /// Valor que reemplaza un campo entre comillas vacío (`''`).
    pub empty_value: String,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self { delimiter: DEFAULT_CSV_DELIMITER, null_values: Vec::new(), empty_value: String::new() }
    }
}

impl CsvFormat {
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn null_values<I, S>(mut self, tokens: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.null_values = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn empty_value(mut self, value: impl Into<String>) -> Self {
        self.empty_value = value.into();
        self
    }

    pub fn validate(&self, kind: &'static str) -> Result<(), SourceError> {
        let d = self.delimiter;
        if d == QUOTE {
            return Err(SourceError::InvalidConfiguration { kind, reason: format!("delimiter cannot be the quote character {QUOTE:?}") });
        }
        if d == '\n' || d == '\r' || d.is_whitespace() {
            return Err(SourceError::InvalidConfiguration { kind, reason: format!("delimiter {d:?} cannot be whitespace or a line break") });
        }
        Ok(())
    }
}

/// Fuente de argumentos. Variante cerrada: el resolver despacha sobre ella
/// sin reflexión.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceDescriptor {
    /// Un valor por fila; `null` y luego `""` se inyectan antes de la lista
    /// si se declara.
    InlineValues {
        values: Vec<Literal>,
        #[serde(default)]
        inject_null: bool,
        #[serde(default)]
        inject_empty: bool,
    },
    CsvInline {
        lines: Vec<String>,
        #[serde(default)]
        format: CsvFormat,
    },
    /// Varios recursos concatenados en orden; los índices de fila continúan
    /// de un recurso al siguiente.
    CsvResource {
        resources: Vec<String>,
        #[serde(default)]
        num_lines_to_skip: usize,
        #[serde(default)]
        format: CsvFormat,
    },
    /// Miembros en orden de ordinal; `include` y `exclude` son excluyentes.
    EnumValues {
        enum_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        include: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        exclude: Option<Vec<String>>,
    },
    /// Factory registrada por nombre; sin nombre se usa el del test.
    FactoryMethod {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    CustomProvider {
        name: String,
        #[serde(default)]
        config: Value,
    },
    CompositeUnion { sources: Vec<SourceDescriptor> },
}

impl SourceDescriptor {
    pub fn inline<I, L>(values: I) -> Self
        where I: IntoIterator<Item = L>,
              L: Into<Literal>
    {
        SourceDescriptor::InlineValues { values: values.into_iter().map(Into::into).collect(),
                                         inject_null: false,
                                         inject_empty: false }
    }

    pub fn strings<I, S>(values: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self::inline(values.into_iter().map(|s| Literal::Str(s.into())))
    }

    pub fn ints<I: IntoIterator<Item = i64>>(values: I) -> Self {
        Self::inline(values)
    }

    /// Activa la inyección de `null` y/o `""` antes de los valores declarados.
    pub fn with_null_and_empty(self, null: bool, empty: bool) -> Self {
        match self {
            SourceDescriptor::InlineValues { values, .. } => SourceDescriptor::InlineValues { values, inject_null: null, inject_empty: empty },
            other => other,
        }
    }

    pub fn csv<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self::csv_with(lines, CsvFormat::default())
    }

    pub fn csv_with<I, S>(lines: I, format: CsvFormat) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        SourceDescriptor::CsvInline { lines: lines.into_iter().map(Into::into).collect(), format }
    }

    pub fn csv_resource<I, S>(resources: I, num_lines_to_skip: usize) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        SourceDescriptor::CsvResource { resources: resources.into_iter().map(Into::into).collect(),
                                        num_lines_to_skip,
                                        format: CsvFormat::default() }
    }

    pub fn enum_values(enum_name: impl Into<String>) -> Self {
        SourceDescriptor::EnumValues { enum_name: enum_name.into(), include: None, exclude: None }
    }

    pub fn enum_including<I, S>(enum_name: impl Into<String>, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        SourceDescriptor::EnumValues { enum_name: enum_name.into(),
                                       include: Some(names.into_iter().map(Into::into).collect()),
                                       exclude: None }
    }

    pub fn enum_excluding<I, S>(enum_name: impl Into<String>, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        SourceDescriptor::EnumValues { enum_name: enum_name.into(),
                                       include: None,
                                       exclude: Some(names.into_iter().map(Into::into).collect()) }
    }

    pub fn factory(name: impl Into<String>) -> Self {
        SourceDescriptor::FactoryMethod { name: Some(name.into()) }
    }

    /// Factory con el mismo nombre que el test.
    pub fn default_factory() -> Self {
        SourceDescriptor::FactoryMethod { name: None }
    }

    pub fn provider(name: impl Into<String>, config: Value) -> Self {
        SourceDescriptor::CustomProvider { name: name.into(), config }
    }

    pub fn union<I: IntoIterator<Item = SourceDescriptor>>(sources: I) -> Self {
        SourceDescriptor::CompositeUnion { sources: sources.into_iter().collect() }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            SourceDescriptor::InlineValues { .. } => "inline_values",
            SourceDescriptor::CsvInline { .. } => "csv_inline",
            SourceDescriptor::CsvResource { .. } => "csv_resource",
            SourceDescriptor::EnumValues { .. } => "enum_values",
            SourceDescriptor::FactoryMethod { .. } => "factory_method",
            SourceDescriptor::CustomProvider { .. } => "custom_provider",
            SourceDescriptor::CompositeUnion { .. } => "composite_union",
        }
    }

    /// Comprobaciones de coherencia que no necesitan registros ni E/S.
    pub fn validate(&self) -> Result<(), SourceError> {
        let kind = self.kind_name();
        let invalid = |reason: String| SourceError::InvalidConfiguration { kind, reason };
        match self {
            SourceDescriptor::InlineValues { values, .. } => {
                if let Some(first) = values.first() {
                    if let Some(other) = values.iter().find(|v| v.kind() != first.kind()) {
                        return Err(invalid(format!("values mix {} and {} literals", first.kind(), other.kind())));
                    }
                }
                Ok(())
            }
            SourceDescriptor::CsvInline { lines, format } => {
                format.validate(kind)?;
                for (number, line) in lines.iter().flat_map(|l| l.lines()).enumerate() {
                    csv::parse_line(line, format, kind, number + 1)?;
                }
                Ok(())
            }
            SourceDescriptor::CsvResource { resources, format, .. } => {
                format.validate(kind)?;
                if resources.is_empty() {
                    return Err(invalid("at least one resource must be declared".into()));
                }
                if let Some(blank) = resources.iter().find(|r| r.trim().is_empty()) {
                    return Err(invalid(format!("resource path {blank:?} is blank")));
                }
                Ok(())
            }
            SourceDescriptor::EnumValues { include: Some(_), exclude: Some(_), .. } => {
                Err(invalid("include and exclude filters are mutually exclusive".into()))
            }
            SourceDescriptor::EnumValues { enum_name, .. } if enum_name.trim().is_empty() => Err(invalid("enum name is blank".into())),
            SourceDescriptor::EnumValues { .. } => Ok(()),
            SourceDescriptor::FactoryMethod { name: Some(name) } if name.trim().is_empty() => {
                Err(invalid("factory name is blank".into()))
            }
            SourceDescriptor::FactoryMethod { .. } => Ok(()),
            SourceDescriptor::CustomProvider { name, .. } if name.trim().is_empty() => Err(invalid("provider name is blank".into())),
            SourceDescriptor::CustomProvider { .. } => Ok(()),
            SourceDescriptor::CompositeUnion { sources } => sources.iter().try_for_each(SourceDescriptor::validate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contradictory_enum_filters_are_rejected() {
        let descriptor = SourceDescriptor::EnumValues { enum_name: "Rank".into(),
                                                        include: Some(vec!["PRIVATE".into()]),
                                                        exclude: Some(vec!["CORPORAL".into()]) };
        assert!(matches!(descriptor.validate(), Err(SourceError::InvalidConfiguration { kind: "enum_values", .. })));
    }

    #[test]
    fn csv_delimiter_cannot_clash_with_quotes() {
        let descriptor = SourceDescriptor::csv_with(["a'b"], CsvFormat::default().delimiter('\''));
        assert!(descriptor.validate().is_err());
        assert!(SourceDescriptor::csv_with(["a b"], CsvFormat::default().delimiter(' ')).validate().is_err());
        assert!(SourceDescriptor::csv_with(["a|b"], CsvFormat::default().delimiter('|')).validate().is_ok());
    }

    #[test]
    fn unterminated_inline_quote_is_detected_up_front() {
        let descriptor = SourceDescriptor::csv(["apple, 1", "'lemon, 3"]);
        assert!(matches!(descriptor.validate(), Err(SourceError::MalformedCsv { line: 2, .. })));
    }

    #[test]
    fn inline_values_share_one_literal_type() {
        assert!(SourceDescriptor::strings(["a", "b"]).validate().is_ok());
        let mixed = SourceDescriptor::InlineValues { values: vec![Literal::Int(1), Literal::Str("x".into())],
                                                     inject_null: false,
                                                     inject_empty: false };
        assert!(mixed.validate().is_err());
    }

    #[test]
    fn union_validates_members() {
        let union = SourceDescriptor::union([SourceDescriptor::strings(["a"]), SourceDescriptor::factory(" ")]);
        assert!(matches!(union.validate(), Err(SourceError::InvalidConfiguration { kind: "factory_method", .. })));
    }
}
