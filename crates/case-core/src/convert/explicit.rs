use crate::model::{ArgValue, TargetType};

/// Conversor declarado explícitamente en un parámetro.
///
/// Recibe el valor crudo (incluido `Null`) y el tipo destino. Debe rechazar
/// los tipos destino que no sabe producir devolviendo `Err` en lugar de
/// forzar una coerción.
pub trait ArgumentConverter: Send + Sync {
    fn convert(&self, source: &ArgValue, target: &TargetType) -> Result<ArgValue, String>;
}

impl<F> ArgumentConverter for F where F: Fn(&ArgValue, &TargetType) -> Result<ArgValue, String> + Send + Sync
{
    fn convert(&self, source: &ArgValue, target: &TargetType) -> Result<ArgValue, String> {
        self(source, target)
    }
}
