//! Renderizado de nombres.
//!
//! - `template`: nombres por caso a partir de plantillas con placeholders.
//! - `structural`: nombres de clases/métodos a partir de identificadores
//!   compuestos (camelCase o con guiones bajos).

pub mod structural;
pub mod template;

pub use structural::{camel_case_to_sentence, underscores_to_sentence, DisplayNameGenerator, IndicativeSentences, ReplaceUnderscores,
                     Standard};
pub use template::{NameTemplate, RenderContext};
