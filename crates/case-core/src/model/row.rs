use std::fmt;

use super::ArgValue;
use crate::constants::ARGUMENTS_SEPARATOR;

/// Valores de una fila sin índice, tal como los producen factories y
/// providers.
pub type Arguments = Vec<ArgValue>;

/// Fila de argumentos con índice estable (base 1) dentro de su fuente.
///
/// Inmutable una vez producida: el resolver asigna el índice y nadie más lo
/// modifica.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentRow {
    index: usize,
    values: Arguments,
}

impl ArgumentRow {
    pub fn new(index: usize, values: Arguments) -> Self {
        Self { index, values }
    }

    /// Índice base 1 dentro de la fuente que produjo la fila.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn values(&self) -> &[ArgValue] {
        &self.values
    }

    pub fn get(&self, position: usize) -> Option<&ArgValue> {
        self.values.get(position)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Arguments {
        self.values
    }
}

impl fmt::Display for ArgumentRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(ARGUMENTS_SEPARATOR))
    }
}
