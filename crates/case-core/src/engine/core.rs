use std::sync::Arc;

use log::debug;

use super::CaseEngineBuilder;
use crate::binding;
use crate::convert::ConversionService;
use crate::errors::{CaseError, SourceError};
use crate::model::{ArgumentRow, BoundArguments, ParameterSlot};
use crate::source::{ArgumentResolver, ResolveContext, RowStream, SourceDescriptor};

/// Fachada sobre el resolver de fuentes y el servicio de conversión. Clonar
/// es barato: los registros se comparten.
#[derive(Debug, Clone, Default)]
pub struct CaseEngine {
    resolver: ArgumentResolver,
    conversions: Arc<ConversionService>,
}

impl CaseEngine {
    pub fn builder() -> CaseEngineBuilder {
        CaseEngineBuilder::default()
    }

    pub(crate) fn from_parts(resolver: ArgumentResolver, conversions: Arc<ConversionService>) -> Self {
        Self { resolver, conversions }
    }

    pub fn resolver(&self) -> &ArgumentResolver {
        &self.resolver
    }

    pub fn conversions(&self) -> &Arc<ConversionService> {
        &self.conversions
    }

    pub fn resolve(&self, descriptor: &SourceDescriptor, context: &ResolveContext) -> Result<RowStream, SourceError> {
        self.resolver.resolve(descriptor, context)
    }

    pub fn bind(&self, row: &ArgumentRow, slots: &[ParameterSlot]) -> Result<BoundArguments, CaseError> {
        binding::bind(row, slots, &self.conversions)
    }

    /// Plan de ejecución sin árbol: resuelve la fuente y liga cada fila a
    /// `slots`, de forma perezosa. El primer error corta la secuencia.
    pub fn bound_rows(&self,
                      descriptor: &SourceDescriptor,
                      slots: Vec<ParameterSlot>,
                      test_name: &str)
                      -> Result<impl Iterator<Item = Result<BoundArguments, CaseError>>, CaseError> {
        binding::validate_slots(&slots)?;
        let rows = self.resolve(descriptor, &ResolveContext::new(test_name))?;
        debug!("binding rows of '{test_name}' to {} parameter(s)", slots.len());
        let conversions = self.conversions.clone();
        let mut failed = false;
        Ok(rows.map_while(move |row| {
                   if failed {
                       return None;
                   }
                   let bound = row.map_err(CaseError::from).and_then(|row| binding::bind(&row, &slots, &conversions));
                   failed = bound.is_err();
                   Some(bound)
               }))
    }
}
