//! Suites de demostración: una clase de prueba por cada escenario.
//!
//! Cada suite es una función que arma un `TestClass`; el motor y la
//! configuración se comparten entre todas.
pub mod aggregation;
pub mod arguments_source;
pub mod csv_file_source;
pub mod csv_source;
pub mod custom_display_names;
pub mod display_names;
pub mod enum_source;
pub mod explicit_conversion;
pub mod implicit_conversion;
pub mod method_source;
pub mod repeated;
pub mod value_source;

use case_core::{ParameterizedTest, TestClass};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Entrada del catálogo de suites.
#[derive(Clone, Copy)]
pub struct Suite {
    pub name: &'static str,
    pub build: fn(&AppConfig) -> Vec<TestClass>,
}

pub fn catalog() -> Vec<Suite> {
    vec![Suite { name: "value_source", build: value_source::classes },
         Suite { name: "csv_source", build: csv_source::classes },
         Suite { name: "csv_file_source", build: csv_file_source::classes },
         Suite { name: "enum_source", build: enum_source::classes },
         Suite { name: "method_source", build: method_source::classes },
         Suite { name: "arguments_source", build: arguments_source::classes },
         Suite { name: "explicit_conversion", build: explicit_conversion::classes },
         Suite { name: "implicit_conversion", build: implicit_conversion::classes },
         Suite { name: "aggregation", build: aggregation::classes },
         Suite { name: "custom_display_names", build: custom_display_names::classes },
         Suite { name: "dynamic_tests", build: dynamic_tests::classes },
         Suite { name: "display_names", build: display_names::classes },
         Suite { name: "repeated", build: repeated::classes }]
}

/// Suites cuyo nombre está en `names`; todas si `names` está vacío.
pub fn select(names: &[String]) -> Result<Vec<Suite>, AppError> {
    let catalog = catalog();
    if names.is_empty() {
        return Ok(catalog);
    }
    names.iter()
         .map(|name| {
             catalog.iter()
                    .find(|s| s.name == name.as_str())
                    .copied()
                    .ok_or_else(|| AppError::UnknownSuite(name.clone()))
         })
         .collect()
}

/// Test parametrizado con la plantilla configurada por defecto.
pub(crate) fn parameterized(method: &str, config: &AppConfig) -> ParameterizedTest {
    ParameterizedTest::new(method).template(config.display_template.clone())
}
