//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use std::env;
use std::path::PathBuf;

use case_core::constants::DEFAULT_DISPLAY_NAME_TEMPLATE;
use case_core::NameTemplate;
use once_cell::sync::Lazy;

use crate::errors::AppError;

pub const RESOURCES_DIR_VAR: &str = "CASEFLOW_RESOURCES_DIR";
pub const DISPLAY_TEMPLATE_VAR: &str = "CASEFLOW_DISPLAY_TEMPLATE";
pub const LOG_VAR: &str = "CASEFLOW_LOG";
pub const REPORT_VAR: &str = "CASEFLOW_REPORT";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Raíz del cargador de recursos para las fuentes `CsvResource`.
    pub resources_dir: PathBuf,
    /// Plantilla por caso usada por las suites que no declaran una.
    pub display_template: String,
    /// Filtro de log por defecto (si `RUST_LOG` no está definido).
    pub log_filter: String,
    /// Si está definido, el binario escribe ahí los eventos en JSON.
    pub report_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig { resources_dir: PathBuf::from("resources"),
                    display_template: DEFAULT_DISPLAY_NAME_TEMPLATE.to_string(),
                    log_filter: "info".to_string(),
                    report_path: None }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Como `from_env`, con una función de búsqueda arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = AppConfig::default();
        let display_template = lookup(DISPLAY_TEMPLATE_VAR).unwrap_or(defaults.display_template);
        NameTemplate::parse(&display_template).map_err(|e| AppError::Config(format!("{DISPLAY_TEMPLATE_VAR}: {e}")))?;
        let log_filter = lookup(LOG_VAR).unwrap_or(defaults.log_filter);
        if log_filter.trim().is_empty() {
            return Err(AppError::Config(format!("{LOG_VAR} está vacío")));
        }
        Ok(AppConfig { resources_dir: lookup(RESOURCES_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.resources_dir),
                       display_template,
                       log_filter,
                       report_path: lookup(REPORT_VAR).filter(|p| !p.trim().is_empty()).map(PathBuf::from) })
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    AppConfig::from_env().unwrap_or_else(|e| {
                             eprintln!("{e}; se usan los valores por defecto");
                             AppConfig::default()
                         })
});

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])).expect("valid"), AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[(RESOURCES_DIR_VAR, "/tmp/data"),
                                                     (DISPLAY_TEMPLATE_VAR, "#{index}: {arguments}"),
                                                     (LOG_VAR, "debug"),
                                                     (REPORT_VAR, "report.json")])).expect("valid");
        assert_eq!(config.resources_dir, PathBuf::from("/tmp/data"));
        assert_eq!(config.display_template, "#{index}: {arguments}");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.report_path, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn rejects_an_invalid_template() {
        let err = AppConfig::from_lookup(lookup(&[(DISPLAY_TEMPLATE_VAR, "{index")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
