//! Runner en memoria: consume el árbol dinámico y registra lo ocurrido.
//!
//! El árbol no se ejecuta solo. Un `HostRunner` lo recorre en profundidad y en
//! orden de producción, invoca cada hoja una vez y decide qué hacer cuando un
//! contenedor falla al producir su siguiente hijo.
mod console;
mod events;
mod memory;

pub use console::render_console_tree;
pub use events::{Outcome, RunEvent, RunEventKind, RunSummary};
pub use memory::InMemoryRunner;

use crate::tree::DynamicNode;

/// Colaborador que ejecuta un árbol de casos.
pub trait HostRunner {
    /// Recorre `root` hasta agotarlo y devuelve el resumen de esta ejecución.
    fn run(&mut self, root: DynamicNode) -> RunSummary;
}
