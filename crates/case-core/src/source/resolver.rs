//! Resolución de descriptores en secuencias perezosas de filas.
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use super::csv::CsvRows;
use super::descriptor::{CsvFormat, SourceDescriptor};
use super::factory::Factory;
use super::provider::{ArgumentsProvider, ProviderContext};
use super::resource::{InMemoryResourceLoader, ResourceLoader};
use crate::errors::SourceError;
use crate::model::{ArgValue, ArgumentRow, Arguments, EnumRegistry};

/// Secuencia perezosa de filas. Tras el primer `Err` no produce más
/// elementos.
pub type RowStream = Box<dyn Iterator<Item = Result<ArgumentRow, SourceError>>>;

type ValueStream = Box<dyn Iterator<Item = Result<Arguments, SourceError>>>;

/// Test al que pertenece la fuente que se resuelve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveContext {
    pub test_name: String,
}

impl ResolveContext {
    pub fn new(test_name: impl Into<String>) -> Self {
        Self { test_name: test_name.into() }
    }
}

/// Resolver de fuentes: registros compartidos de enums, factories y
/// providers más el cargador de recursos. Clonar es barato y cada
/// resolución produce una secuencia independiente.
#[derive(Clone)]
pub struct ArgumentResolver {
    enums: Arc<EnumRegistry>,
    factories: Arc<HashMap<String, Factory>>,
    providers: Arc<HashMap<String, Arc<dyn ArgumentsProvider>>>,
    resources: Arc<dyn ResourceLoader>,
}

impl Default for ArgumentResolver {
    fn default() -> Self {
        Self::new(Arc::default(), HashMap::new(), HashMap::new(), Arc::new(InMemoryResourceLoader::default()))
    }
}

impl fmt::Debug for ArgumentResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentResolver")
         .field("enums", &self.enums.names().collect::<Vec<_>>())
         .field("factories", &self.factories.len())
         .field("providers", &self.providers.len())
         .finish()
    }
}

impl ArgumentResolver {
    pub fn new(enums: Arc<EnumRegistry>,
               factories: HashMap<String, Factory>,
               providers: HashMap<String, Arc<dyn ArgumentsProvider>>,
               resources: Arc<dyn ResourceLoader>)
               -> Self {
        Self { enums, factories: Arc::new(factories), providers: Arc::new(providers), resources }
    }

    pub fn enums(&self) -> &Arc<EnumRegistry> {
        &self.enums
    }

    /// Valida el descriptor completo (coherencia + nombres registrados) sin
    /// resolver nada.
    pub fn check(&self, descriptor: &SourceDescriptor, context: &ResolveContext) -> Result<(), SourceError> {
        descriptor.validate()?;
        self.check_names(descriptor, context)
    }

    fn check_names(&self, descriptor: &SourceDescriptor, context: &ResolveContext) -> Result<(), SourceError> {
        match descriptor {
            SourceDescriptor::EnumValues { enum_name, include, exclude } => {
                let definition = self.enums.get(enum_name).ok_or_else(|| SourceError::UnknownEnum(enum_name.clone()))?;
                let filter = include.iter().chain(exclude.iter()).flatten();
                for member in filter {
                    if !definition.contains(member) {
                        return Err(SourceError::UnknownEnumMember { enum_name: enum_name.clone(), member: member.clone() });
                    }
                }
                Ok(())
            }
            SourceDescriptor::FactoryMethod { name } => {
                let name = name.as_deref().unwrap_or(&context.test_name);
                if self.factories.contains_key(name) {
                    Ok(())
                } else {
                    Err(SourceError::UnknownFactory(name.to_string()))
                }
            }
            SourceDescriptor::CustomProvider { name, .. } => {
                if self.providers.contains_key(name) {
                    Ok(())
                } else {
                    Err(SourceError::UnknownProvider(name.clone()))
                }
            }
            SourceDescriptor::CompositeUnion { sources } => sources.iter().try_for_each(|s| self.check_names(s, context)),
            _ => Ok(()),
        }
    }

    /// Resuelve `descriptor` en una secuencia perezosa de filas. Los errores
    /// de configuración se devuelven aquí; los que dependen del contenido
    /// (CSV mal formado, recurso ausente, fallo de una factory) aparecen como
    /// elemento `Err` en la posición donde ocurren.
    pub fn resolve(&self, descriptor: &SourceDescriptor, context: &ResolveContext) -> Result<RowStream, SourceError> {
        self.check(descriptor, context)?;
        Ok(self.resolve_checked(descriptor, context))
    }

    fn resolve_checked(&self, descriptor: &SourceDescriptor, context: &ResolveContext) -> RowStream {
        debug!("resolving {} source for '{}'", descriptor.kind_name(), context.test_name);
        let values: ValueStream = match descriptor {
            SourceDescriptor::InlineValues { values, inject_null, inject_empty } => {
                let mut rows: Vec<Arguments> = Vec::with_capacity(values.len() + 2);
                if *inject_null {
                    rows.push(vec![ArgValue::Null]);
                }
                if *inject_empty {
                    rows.push(vec![ArgValue::from("")]);
                }
                rows.extend(values.iter().map(|v| vec![ArgValue::from(v)]));
                Box::new(rows.into_iter().map(Ok))
            }
            SourceDescriptor::CsvInline { lines, format } => {
                let lines: Vec<String> = lines.iter().flat_map(|l| l.lines()).map(str::to_string).collect();
                Box::new(CsvRows::new(lines.into_iter().enumerate().map(|(i, l)| (i + 1, l)), format.clone(), "inline CSV"))
            }
            SourceDescriptor::CsvResource { resources, num_lines_to_skip, format } => {
                self.csv_resources(resources.clone(), *num_lines_to_skip, format.clone())
            }
            SourceDescriptor::EnumValues { enum_name, include, exclude } => {
                let members: Vec<Arguments> = self.enums
                                                  .get(enum_name)
                                                  .map(|definition| {
                                                      definition.members()
                                                                .filter(|m| {
                                                                    include.as_ref().map_or(true, |names| names.iter().any(|n| *n == *m.name))
                                                                    && exclude.as_ref().map_or(true, |names| !names.iter().any(|n| *n == *m.name))
                                                                })
                                                                .map(|m| vec![ArgValue::Enum(m)])
                                                                .collect()
                                                  })
                                                  .unwrap_or_default();
                Box::new(members.into_iter().map(Ok))
            }
            SourceDescriptor::FactoryMethod { name } => {
                let name = name.clone().unwrap_or_else(|| context.test_name.clone());
                self.factory_rows(name)
            }
            SourceDescriptor::CustomProvider { name, config } => {
                let context = ProviderContext { test_name: context.test_name.clone(), config: config.clone() };
                self.provider_rows(name.clone(), context)
            }
            SourceDescriptor::CompositeUnion { sources } => {
                // Cada miembro conserva sus propios índices.
                let resolver = self.clone();
                let context = context.clone();
                let rows = sources.clone().into_iter().flat_map(move |s| resolver.resolve_checked(&s, &context));
                return Box::new(StopAfterError::new(rows));
            }
        };
        Box::new(StopAfterError::new(values.enumerate().map(|(i, r)| {
                                                          r.map(|values| {
                                                               let row = ArgumentRow::new(i + 1, values);
                                                               trace!("row {}: {}", row.index(), row);
                                                               row
                                                           })
                                                      })))
    }

    fn csv_resources(&self, resources: Vec<String>, skip: usize, format: CsvFormat) -> ValueStream {
        let loader = self.resources.clone();
        Box::new(resources.into_iter().flat_map(move |path| -> ValueStream {
                                          match loader.load(&path) {
                                              Ok(text) => {
                                                  let lines: Vec<(usize, String)> = text.lines()
                                                                                        .enumerate()
                                                                                        .skip(skip)
                                                                                        .map(|(i, l)| (i + 1, l.to_string()))
                                                                                        .collect();
                                                  Box::new(CsvRows::new(lines.into_iter(), format.clone(), path))
                                              }
                                              Err(e) => Box::new(std::iter::once(Err(SourceError::ResourceUnavailable { path,
                                                                                                                       reason: e.to_string() }))),
                                          }
                                      }))
    }

    fn factory_rows(&self, name: String) -> ValueStream {
        let factory = self.factories.get(&name).cloned();
        let mut started = false;
        let mut rows: Option<Box<dyn Iterator<Item = Arguments>>> = None;
        Box::new(std::iter::from_fn(move || {
                     if !started {
                         started = true;
                         // La factory se invoca al pedir la primera fila.
                         let output = match factory.as_ref() {
                             Some(f) => f().map_err(|e| SourceError::FactoryFailed { name: name.clone(), reason: e.to_string() }),
                             None => Err(SourceError::UnknownFactory(name.clone())),
                         };
                         match output {
                             Ok(output) => rows = Some(output.into_rows()),
                             Err(e) => return Some(Err(e)),
                         }
                     }
                     rows.as_mut().and_then(Iterator::next).map(Ok)
                 }))
    }

    fn provider_rows(&self, name: String, context: ProviderContext) -> ValueStream {
        let provider = self.providers.get(&name).cloned();
        let mut started = false;
        let mut rows: Option<Box<dyn Iterator<Item = Arguments>>> = None;
        Box::new(std::iter::from_fn(move || {
                     if !started {
                         started = true;
                         let output = match provider.as_ref() {
                             Some(p) => p.provide_rows(&context)
                                         .map_err(|e| SourceError::ProviderFailed { name: name.clone(), reason: e.to_string() }),
                             None => Err(SourceError::UnknownProvider(name.clone())),
                         };
                         match output {
                             Ok(output) => rows = Some(output),
                             Err(e) => return Some(Err(e)),
                         }
                     }
                     rows.as_mut().and_then(Iterator::next).map(Ok)
                 }))
    }
}

/// Corta la secuencia tras el primer error: las fuentes fallan rápido y no
/// saltan filas mal formadas.
struct StopAfterError<I> {
    inner: I,
    done: bool,
}

impl<I> StopAfterError<I> {
    fn new(inner: I) -> Self {
        Self { inner, done: false }
    }
}

impl<I, T, E> Iterator for StopAfterError<I> where I: Iterator<Item = Result<T, E>>
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.inner.next();
        if matches!(item, Some(Err(_)) | None) {
            self.done = true;
        }
        item
    }
}
