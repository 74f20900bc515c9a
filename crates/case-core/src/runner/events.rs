use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resultado de una hoja.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Passed,
    /// El cuerpo devolvió `Err`.
    Failed { message: String },
    /// El cuerpo entró en pánico (p. ej. un `assert!`).
    Panicked { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Tipos de evento emitidos durante un recorrido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEventKind {
    ContainerStarted,
    /// Cierra el contenedor abierto con el mismo `id`.
    ContainerFinished,
    TestFinished { outcome: Outcome },
    /// El contenedor no pudo producir su siguiente hijo; no se piden más.
    ProductionFailed { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // orden de append
    /// Identifica el nodo; inicio y fin de un contenedor comparten id.
    pub id: Uuid,
    pub depth: usize,
    pub name: String,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>, // solo informativo
}

/// Conteos de una ejecución.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub passed: usize,
    /// Hojas con `Err` o pánico.
    pub failed: usize,
    /// Fallos de producción de nodos.
    pub errored: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}
