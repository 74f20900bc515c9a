//! Engine: registros compartidos + resolver + servicio de conversión.
//!
//! Construcción típica:
//!
//! ```ignore
//! let engine = CaseEngine::builder()
//!     .enum_type::<Rank>()
//!     .factory("stringProvider", || Ok(FactoryOutput::array(["apple", "banana"])))
//!     .resources(FsResourceLoader::new("resources"))
//!     .build();
//! ```

pub mod builder;
pub mod core;

pub use builder::CaseEngineBuilder;
pub use self::core::CaseEngine;
