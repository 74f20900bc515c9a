//! Resolución de fuentes de argumentos.
//!
//! `SourceDescriptor` (datos) -> `ArgumentResolver::resolve` -> `RowStream`
//! perezoso de `ArgumentRow`. Las fuentes potencialmente infinitas
//! (factories, providers) nunca se materializan.

pub mod csv;
pub mod descriptor;
pub mod factory;
pub mod provider;
pub mod resolver;
pub mod resource;

pub use descriptor::{CsvFormat, Literal, SourceDescriptor};
pub use factory::{Factory, FactoryItem, FactoryOutput, UserError};
pub use provider::{ArgumentsProvider, ProviderContext};
pub use resolver::{ArgumentResolver, ResolveContext, RowStream};
pub use resource::{FsResourceLoader, InMemoryResourceLoader, ResourceLoader};
