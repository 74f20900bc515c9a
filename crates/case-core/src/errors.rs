//! Errores del core.
//!
//! Cada fase tiene su propio tipo (`SourceError`, `ConversionError`,
//! `AggregationError`, `RenderError`) y `CaseError` los unifica para que `?`
//! componga entre módulos. Todos llevan el contexto necesario (tipo de fuente,
//! índice de fila, posición del parámetro, fragmento de plantilla) para
//! atribuir el fallo a un caso concreto.

use thiserror::Error;

use crate::model::{ArgValue, TargetType};

/// Fuente mal configurada, contradictoria o ilegible.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    #[error("invalid {kind} source: {reason}")]
    InvalidConfiguration { kind: &'static str, reason: String },
    #[error("malformed CSV in {origin} at line {line}: {reason}")]
    MalformedCsv { origin: String, line: usize, reason: String },
    #[error("resource '{path}' unavailable: {reason}")]
    ResourceUnavailable { path: String, reason: String },
    #[error("unknown enum '{0}'")]
    UnknownEnum(String),
    #[error("enum '{enum_name}' has no member named '{member}'")]
    UnknownEnumMember { enum_name: String, member: String },
    #[error("no factory registered as '{0}'")]
    UnknownFactory(String),
    #[error("no provider registered as '{0}'")]
    UnknownProvider(String),
    #[error("factory '{name}' failed: {reason}")]
    FactoryFailed { name: String, reason: String },
    #[error("provider '{name}' failed: {reason}")]
    ProviderFailed { name: String, reason: String },
    #[error("row {row_index} supplies {values} value(s) but {slots} positional parameter(s) are declared")]
    ArityMismatch { row_index: usize, slots: usize, values: usize },
    #[error("invalid parameter slots: {0}")]
    InvalidSlots(String),
}

/// Ninguna regla de conversión aplica, o el conversor explícito rechazó el
/// par (valor, tipo).
#[derive(Debug, Error, Clone, PartialEq)]
#[error("cannot convert {raw} to {target}{at}: {reason}", at = location(.row_index, .slot))]
pub struct ConversionError {
    pub raw: String,
    pub target: TargetType,
    pub reason: String,
    pub row_index: Option<usize>,
    pub slot: Option<usize>,
}

impl ConversionError {
    pub fn new(raw: &ArgValue, target: &TargetType, reason: impl Into<String>) -> Self {
        Self { raw: raw.describe(),
               target: target.clone(),
               reason: reason.into(),
               row_index: None,
               slot: None }
    }

    /// Atribuye el error a una fila y a una posición de parámetro.
    pub fn at(mut self, row_index: usize, slot: usize) -> Self {
        self.row_index = Some(row_index);
        self.slot = Some(slot);
        self
    }
}

fn location(row_index: &Option<usize>, slot: &Option<usize>) -> String {
    match (row_index, slot) {
        (Some(r), Some(s)) => format!(" (row {r}, slot {s})"),
        (Some(r), None) => format!(" (row {r})"),
        (None, Some(s)) => format!(" (slot {s})"),
        (None, None) => String::new(),
    }
}

/// Fallo al colapsar una fila completa en un único valor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AggregationError {
    #[error("row {row_index}{at}: index {index} is out of bounds for {len} argument(s)", at = slot_label(.slot))]
    IndexOutOfBounds { row_index: usize, slot: Option<usize>, index: usize, len: usize },
    #[error("row {row_index}{at}: {source}", at = slot_label(.slot))]
    Conversion {
        row_index: usize,
        slot: Option<usize>,
        #[source]
        source: ConversionError,
    },
    #[error("row {row_index}, slot {slot}: aggregator failed: {reason}")]
    Aggregator { row_index: usize, slot: usize, reason: String },
}

impl AggregationError {
    pub fn failed(row_index: usize, slot: usize, reason: impl Into<String>) -> Self {
        Self::Aggregator { row_index, slot, reason: reason.into() }
    }

    /// Atribuye el error al parámetro que agregaba la fila. Un slot ya
    /// asignado se conserva.
    pub fn at_slot(self, position: usize) -> Self {
        match self {
            Self::IndexOutOfBounds { row_index, slot, index, len } => {
                Self::IndexOutOfBounds { row_index, slot: slot.or(Some(position)), index, len }
            }
            Self::Conversion { row_index, slot, source } => Self::Conversion { row_index, slot: slot.or(Some(position)), source },
            other => other,
        }
    }

    pub fn slot(&self) -> Option<usize> {
        match self {
            Self::IndexOutOfBounds { slot, .. } | Self::Conversion { slot, .. } => *slot,
            Self::Aggregator { slot, .. } => Some(*slot),
        }
    }
}

fn slot_label(slot: &Option<usize>) -> String {
    slot.map(|s| format!(", slot {s}")).unwrap_or_default()
}

/// Plantilla de nombre inválida o imposible de renderizar para un caso.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("placeholder {{{index}}} in '{template}' is out of range for {len} argument(s)")]
    ArgumentOutOfRange { template: String, index: usize, len: usize },
    #[error("placeholder {{{placeholder}}} in '{template}' refers to a null argument")]
    NullArgument { template: String, placeholder: String },
    #[error("unknown placeholder {{{name}}} in '{template}'")]
    UnknownPlaceholder { template: String, name: String },
    #[error("unterminated placeholder at offset {offset} in '{template}'")]
    UnterminatedPlaceholder { template: String, offset: usize },
    #[error("unterminated quote at offset {offset} in '{template}'")]
    UnterminatedQuote { template: String, offset: usize },
    #[error("placeholder {{{name}}} in '{template}' is not available for this case")]
    MissingContext { template: String, name: String },
}

/// Error unificado de construcción de casos.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CaseError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Render(#[from] RenderError),
    /// Fallo al nombrar un caso concreto (fila o repetición `row_index`).
    #[error("case {row_index}: {source}")]
    CaseName {
        row_index: usize,
        #[source]
        source: RenderError,
    },
}

impl CaseError {
    pub fn case_name(row_index: usize, source: RenderError) -> Self {
        Self::CaseName { row_index, source }
    }
}
