use std::error::Error;
use std::fmt;
use std::rc::Rc;

use log::trace;

use super::producer::Producer;
use crate::errors::CaseError;

/// Resultado de ejecutar una hoja. Los cuerpos usan `?` sobre cualquier
/// error.
pub type TestOutcome = Result<(), Box<dyn Error + Send + Sync>>;

/// Acción sin argumentos de una hoja; la invoca el runner, una sola vez.
pub type Executable = Box<dyn FnOnce() -> TestOutcome>;

/// Hijos perezosos de un contenedor. Un `Err` marca el nodo cuya
/// construcción falló.
pub type NodeStream = Box<dyn Iterator<Item = Result<DynamicNode, CaseError>>>;

/// Nombre visible, renderizado una vez.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DisplayName {
    fn from(value: &str) -> Self {
        DisplayName(value.to_string())
    }
}

impl From<String> for DisplayName {
    fn from(value: String) -> Self {
        DisplayName(value)
    }
}

/// Hoja del árbol.
pub struct DynamicTest {
    name: DisplayName,
    executable: Executable,
}

impl DynamicTest {
    pub fn new<F>(name: impl Into<DisplayName>, executable: F) -> Self
        where F: FnOnce() -> TestOutcome + 'static
    {
        Self { name: name.into(), executable: Box::new(executable) }
    }

    /// Una hoja por cada valor producido: `name_fn` da el nombre y
    /// `executor` se invoca con el valor cuando el runner ejecuta la hoja.
    pub fn stream<P, N, E>(producer: P, name_fn: N, executor: E) -> NodeStream
        where P: Producer + 'static,
              P::Item: 'static,
              N: Fn(&P::Item) -> String + 'static,
              E: Fn(P::Item) -> TestOutcome + 'static
    {
        let executor = Rc::new(executor);
        Box::new(producer.produced().map(move |input| {
                                        let name = name_fn(&input);
                                        trace!("streamed test '{name}'");
                                        let executor = executor.clone();
                                        Ok(DynamicNode::Test(DynamicTest::new(name, move || executor(input))))
                                    }))
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn execute(self) -> TestOutcome {
        (self.executable)()
    }

    pub fn into_parts(self) -> (DisplayName, Executable) {
        (self.name, self.executable)
    }
}

impl fmt::Debug for DynamicTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicTest").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Contenedor con hijos producidos bajo demanda.
pub struct DynamicContainer {
    name: DisplayName,
    children: NodeStream,
}

impl DynamicContainer {
    pub fn new<I, N>(name: impl Into<DisplayName>, children: I) -> Self
        where I: IntoIterator<Item = N>,
              I::IntoIter: 'static,
              N: Into<DynamicNode> + 'static
    {
        Self::from_stream(name, Box::new(children.into_iter().map(|n| Ok(n.into()))))
    }

    pub fn from_stream(name: impl Into<DisplayName>, children: NodeStream) -> Self {
        Self { name: name.into(), children }
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn into_children(self) -> NodeStream {
        self.children
    }

    pub fn into_parts(self) -> (DisplayName, NodeStream) {
        (self.name, self.children)
    }
}

impl fmt::Debug for DynamicContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicContainer").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Nodo del árbol: hoja o contenedor.
#[derive(Debug)]
pub enum DynamicNode {
    Test(DynamicTest),
    Container(DynamicContainer),
}

impl DynamicNode {
    pub fn name(&self) -> &DisplayName {
        match self {
            DynamicNode::Test(t) => t.name(),
            DynamicNode::Container(c) => c.name(),
        }
    }
}

impl From<DynamicTest> for DynamicNode {
    fn from(value: DynamicTest) -> Self {
        DynamicNode::Test(value)
    }
}

impl From<DynamicContainer> for DynamicNode {
    fn from(value: DynamicContainer) -> Self {
        DynamicNode::Container(value)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::tree::iterate;

    #[test]
    fn building_a_container_does_not_touch_its_children() {
        let produced = Rc::new(Cell::new(0));
        let counter = produced.clone();
        let container = DynamicContainer::new("lazy",
                                              (0..).map(move |n| {
                                                       counter.set(counter.get() + 1);
                                                       DynamicTest::new(format!("child {n}"), || Ok(()))
                                                   }));
        assert_eq!(produced.get(), 0);
        let first: Vec<String> = container.into_children().take(2).map(|n| n.expect("node").name().to_string()).collect();
        assert_eq!(first, vec!["child 0", "child 1"]);
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn streamed_tests_run_the_executor_only_when_executed() {
        let runs = Rc::new(Cell::new(0));
        let seen = runs.clone();
        let nodes: Vec<DynamicNode> = DynamicTest::stream(iterate(1, |n| *n < 10, |n| n + 2),
                                                          |n| format!("test with {n}"),
                                                          move |n: i32| {
                                                              seen.set(seen.get() + 1);
                                                              if n & 1 == 1 { Ok(()) } else { Err("even".into()) }
                                                          }).map(|n| n.expect("node"))
                                                            .collect();
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[4].name().as_str(), "test with 9");
        assert_eq!(runs.get(), 0);
        for node in nodes {
            if let DynamicNode::Test(test) = node {
                assert!(test.execute().is_ok());
            }
        }
        assert_eq!(runs.get(), 5);
    }
}
