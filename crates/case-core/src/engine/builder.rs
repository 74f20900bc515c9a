//! Builder para `CaseEngine`.
use std::collections::HashMap;
use std::sync::Arc;

use super::CaseEngine;
use crate::convert::{ConversionService, StringFactory};
use crate::model::{ArgumentEnum, EnumDefinition, EnumRegistry, Opaque};
use crate::source::{ArgumentResolver, ArgumentsProvider, Factory, FactoryOutput, InMemoryResourceLoader, ResourceLoader, UserError};

/// Acumula registros (enums, factories, providers, factories de strings) y
/// el cargador de recursos. Registrar dos veces el mismo nombre reemplaza la
/// entrada anterior.
#[derive(Default)]
pub struct CaseEngineBuilder {
    enums: EnumRegistry,
    factories: HashMap<String, Factory>,
    providers: HashMap<String, Arc<dyn ArgumentsProvider>>,
    string_factories: Vec<(String, StringFactory)>,
    resources: Option<Arc<dyn ResourceLoader>>,
}

impl CaseEngineBuilder {
    pub fn enum_type<E: ArgumentEnum>(mut self) -> Self {
        self.enums.register::<E>();
        self
    }

    pub fn enum_definition(mut self, definition: EnumDefinition) -> Self {
        self.enums.register_definition(definition);
        self
    }

    /// Registra una factory sin argumentos bajo `name`.
    pub fn factory<F>(mut self, name: impl Into<String>, factory: F) -> Self
        where F: Fn() -> Result<FactoryOutput, UserError> + Send + Sync + 'static
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    pub fn provider<P>(mut self, name: impl Into<String>, provider: P) -> Self
        where P: ArgumentsProvider + 'static
    {
        self.providers.insert(name.into(), Arc::new(provider));
        self
    }

    /// Fallback `String -> TargetType::Object(type_name)`.
    pub fn string_factory<F>(mut self, type_name: impl Into<String>, factory: F) -> Self
        where F: Fn(&str) -> Result<Opaque, String> + Send + Sync + 'static
    {
        self.string_factories.push((type_name.into(), Arc::new(factory)));
        self
    }

    pub fn resources<L>(mut self, loader: L) -> Self
        where L: ResourceLoader + 'static
    {
        self.resources = Some(Arc::new(loader));
        self
    }

    pub fn build(self) -> CaseEngine {
        let enums = Arc::new(self.enums);
        let mut conversions = ConversionService::new(enums.clone());
        for (type_name, factory) in self.string_factories {
            conversions.register_string_factory(type_name, factory);
        }
        let resources = self.resources.unwrap_or_else(|| Arc::new(InMemoryResourceLoader::default()));
        let resolver = ArgumentResolver::new(enums, self.factories, self.providers, resources);
        CaseEngine::from_parts(resolver, Arc::new(conversions))
    }
}
