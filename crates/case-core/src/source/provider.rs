use serde_json::Value;

use super::factory::UserError;
use crate::model::Arguments;

/// Contexto entregado a un provider: test al que pertenece la fuente y la
/// configuración declarada.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderContext {
    pub test_name: String,
    pub config: Value,
}

/// Provider externo de filas. El resolver lo consulta una vez por
/// resolución y consume la secuencia de forma perezosa.
pub trait ArgumentsProvider: Send + Sync {
    fn provide_rows(&self, context: &ProviderContext) -> Result<Box<dyn Iterator<Item = Arguments>>, UserError>;
}

impl<F> ArgumentsProvider for F where F: Fn(&ProviderContext) -> Result<Box<dyn Iterator<Item = Arguments>>, UserError> + Send + Sync
{
    fn provide_rows(&self, context: &ProviderContext) -> Result<Box<dyn Iterator<Item = Arguments>>, UserError> {
        self(context)
    }
}
