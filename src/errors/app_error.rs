use case_core::CaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error al construir casos: {0}")]
    Case(#[from] CaseError),
    #[error("Error al serializar el reporte: {0}")]
    Report(#[from] serde_json::Error),
    #[error("Suite desconocida: {0}")]
    UnknownSuite(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_core::SourceError;

    #[test]
    fn test_io_variant_from() {
        let io_err = std::io::Error::other("falló IO");
        let err: AppError = io_err.into();
        assert_eq!(err.to_string(), "Error en IO: falló IO");
    }

    #[test]
    fn test_config_variant_format() {
        let err = AppError::Config("mala configuración".into());
        assert_eq!(err.to_string(), "Error de configuración: mala configuración");
    }

    #[test]
    fn test_case_variant_from() {
        let err: AppError = CaseError::from(SourceError::UnknownFactory("oddRange".into())).into();
        assert_eq!(err.to_string(), "Error al construir casos: no factory registered as 'oddRange'");
    }
}
