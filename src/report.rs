//! Ejecución de suites y reporte de resultados.
use std::fs;
use std::path::Path;

use case_core::runner::{render_console_tree, HostRunner, InMemoryRunner, RunEvent};
use case_core::{DynamicContainer, DynamicNode, RunSummary};
use log::info;
use serde::Serialize;

use crate::config::AppConfig;
use crate::engine::demo_engine;
use crate::errors::AppError;
use crate::suites;

/// Nombre del contenedor raíz de una ejecución.
pub const ROOT_NAME: &str = "caseflow";

/// Resultado de ejecutar un conjunto de suites.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub suites: Vec<String>,
    pub summary: RunSummary,
    pub events: Vec<RunEvent>,
}

impl RunReport {
    /// Árbol estilo consola.
    pub fn console_tree(&self) -> String {
        render_console_tree(&self.events)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), AppError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Construye las suites de `names` (todas si está vacío) bajo un único
/// contenedor raíz y las ejecuta con el runner en memoria.
pub fn run_suites(config: &AppConfig, names: &[String]) -> Result<RunReport, AppError> {
    let selected = suites::select(names)?;
    let engine = demo_engine(config);
    let classes: Vec<DynamicNode> = selected.iter()
                                            .flat_map(|suite| (suite.build)(config))
                                            .map(|class| class.build(&engine).into())
                                            .collect();
    let mut runner = InMemoryRunner::new();
    let summary = runner.run(DynamicContainer::new(ROOT_NAME, classes).into());
    info!("{} suite(s): {} passed, {} failed, {} errored",
          selected.len(),
          summary.passed,
          summary.failed,
          summary.errored);
    Ok(RunReport { suites: selected.iter().map(|s| s.name.to_string()).collect(),
                   summary,
                   events: runner.take_events() })
}
