//! Constantes del core.
//!
//! Valores por defecto compartidos por la resolución de fuentes y el
//! renderizado de nombres. Cambiarlos altera los nombres visibles de los
//! casos generados.

/// Plantilla por defecto de los casos parametrizados cuando no se declara
/// ninguna.
pub const DEFAULT_DISPLAY_NAME_TEMPLATE: &str = "[{index}] {arguments}";

/// Plantilla por defecto de los casos repetidos.
pub const DEFAULT_REPETITION_TEMPLATE: &str = "repetition {currentRepetition} of {totalRepetitions}";

/// Separador usado por `{arguments}`.
pub const ARGUMENTS_SEPARATOR: &str = ", ";

/// Delimitador CSV por defecto.
pub const DEFAULT_CSV_DELIMITER: char = ',';

/// Carácter de comillas para campos CSV y secciones literales de plantillas.
pub const QUOTE: char = '\'';
