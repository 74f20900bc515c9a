//! CaseFlow Rust Library
//!
//! Este crate reúne las suites de demostración sobre `case-core`:
//! - Expone `config` para la configuración global (`CONFIG`).
//! - Expone `errors` con el error de aplicación.
//! - Expone `engine` con los registros (enums, factories, providers) que
//!   las suites referencian por nombre.
//! - Expone `suites` y `report` para construir, ejecutar y reportar cada suite.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod engine;
pub mod errors;
pub mod report;
pub mod suites;

pub use report::{run_suites, RunReport};
