use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use chrono::Utc;
use log::{debug, warn};
use uuid::Uuid;

use super::events::{Outcome, RunEvent, RunEventKind, RunSummary};
use super::HostRunner;
use crate::tree::{DisplayName, DynamicNode, DynamicTest, NodeStream};

/// Runner que guarda los eventos en un vector append-only.
///
/// Los eventos de ejecuciones sucesivas se acumulan; cada `run` devuelve solo
/// el resumen de su árbol.
#[derive(Debug, Default)]
pub struct InMemoryRunner {
    events: Vec<RunEvent>,
}

impl InMemoryRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RunEvent] {
        &self.events
    }

    /// Vacía el registro y lo devuelve.
    pub fn take_events(&mut self) -> Vec<RunEvent> {
        std::mem::take(&mut self.events)
    }

    fn append(&mut self, id: Uuid, depth: usize, name: &str, kind: RunEventKind) {
        let seq = self.events.len() as u64;
        self.events.push(RunEvent { seq, id, depth, name: name.to_string(), kind, ts: Utc::now() });
    }

    fn run_leaf(&mut self, test: DynamicTest, depth: usize, summary: &mut RunSummary) {
        let (name, executable) = test.into_parts();
        let outcome = match panic::catch_unwind(AssertUnwindSafe(executable)) {
            Ok(Ok(())) => Outcome::Passed,
            Ok(Err(e)) => Outcome::Failed { message: e.to_string() },
            Err(payload) => Outcome::Panicked { message: panic_message(payload.as_ref()) },
        };
        match &outcome {
            Outcome::Passed => summary.passed += 1,
            Outcome::Failed { message } | Outcome::Panicked { message } => {
                warn!("test '{name}' failed: {message}");
                summary.failed += 1;
            }
        }
        self.append(Uuid::new_v4(), depth, name.as_str(), RunEventKind::TestFinished { outcome });
    }

    /// Hoja: se ejecuta ya. Contenedor: se abre y queda en la pila.
    fn enter(&mut self, node: DynamicNode, depth: usize, open: &mut Vec<OpenContainer>, summary: &mut RunSummary) {
        match node {
            DynamicNode::Test(test) => self.run_leaf(test, depth, summary),
            DynamicNode::Container(container) => {
                let (name, children) = container.into_parts();
                let id = Uuid::new_v4();
                debug!("entering container '{name}'");
                self.append(id, depth, name.as_str(), RunEventKind::ContainerStarted);
                open.push(OpenContainer { id, depth, name, children });
            }
        }
    }

    fn close(&mut self, container: OpenContainer) {
        self.append(container.id, container.depth, container.name.as_str(), RunEventKind::ContainerFinished);
    }

    /// Recorrido en profundidad con pila explícita; la profundidad del árbol
    /// no consume pila de llamadas.
    fn visit(&mut self, root: DynamicNode, summary: &mut RunSummary) {
        let mut open: Vec<OpenContainer> = Vec::new();
        self.enter(root, 0, &mut open, summary);
        while let Some(current) = open.last_mut() {
            let depth = current.depth + 1;
            match next_child(&mut current.children) {
                Some(Ok(node)) => self.enter(node, depth, &mut open, summary),
                Some(Err(error)) => {
                    if let Some(container) = open.pop() {
                        warn!("container '{}' stopped: {error}", container.name);
                        summary.errored += 1;
                        self.append(Uuid::new_v4(), depth, container.name.as_str(), RunEventKind::ProductionFailed { error });
                        self.close(container);
                    }
                }
                None => {
                    if let Some(container) = open.pop() {
                        self.close(container);
                    }
                }
            }
        }
    }
}

/// Contenedor abierto a la espera de su siguiente hijo.
struct OpenContainer {
    id: Uuid,
    depth: usize,
    name: DisplayName,
    children: NodeStream,
}

impl HostRunner for InMemoryRunner {
    fn run(&mut self, root: DynamicNode) -> RunSummary {
        let mut summary = RunSummary::default();
        self.visit(root, &mut summary);
        debug!("run finished: {summary:?}");
        summary
    }
}

/// Siguiente hijo; un pánico al producirlo cuenta como fallo de producción.
fn next_child(children: &mut NodeStream) -> Option<Result<DynamicNode, String>> {
    match panic::catch_unwind(AssertUnwindSafe(|| children.next())) {
        Ok(next) => next.map(|child| child.map_err(|e| e.to_string())),
        Err(payload) => Some(Err(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
