//! Árbol dinámico de casos.
//!
//! Hojas (`DynamicTest`: nombre + acción) y contenedores
//! (`DynamicContainer`: nombre + hijos perezosos). Construir un contenedor no
//! evalúa a sus hijos; el runner los extrae en orden de producción.

pub mod node;
pub mod producer;
pub mod source;

pub use node::{DisplayName, DynamicContainer, DynamicNode, DynamicTest, Executable, NodeStream, TestOutcome};
pub use producer::{iterate, FromIter, Iterate, Produced, Producer};
pub use source::{build_root, build_tree, NodeSource};
