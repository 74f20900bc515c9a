//! Clases de prueba: contenedores con nombre de métodos y clases anidadas.
use std::sync::Arc;

use log::debug;

use super::{ParameterizedTest, RepeatedTest};
use crate::engine::CaseEngine;
use crate::errors::CaseError;
use crate::naming::{DisplayNameGenerator, Standard};
use crate::tree::{build_tree, DynamicContainer, DynamicNode, DynamicTest, NodeSource, NodeStream, TestOutcome};

type TestBody = Box<dyn FnOnce() -> TestOutcome>;
type NodeFactory = Box<dyn FnOnce() -> Result<NodeSource, CaseError>>;

enum Member {
    Test { method: String, display_name: Option<String>, body: TestBody },
    Factory { method: String, display_name: Option<String>, factory: NodeFactory },
    Parameterized(ParameterizedTest),
    Repeated(RepeatedTest),
    Nested(TestClass),
}

/// Clase de prueba. El nombre de la clase y de cada miembro lo da el
/// `DisplayNameGenerator` (heredado por las clases anidadas) salvo que se
/// declare uno explícito.
pub struct TestClass {
    class: String,
    display_name: Option<String>,
    generator: Option<Arc<dyn DisplayNameGenerator>>,
    members: Vec<Member>,
}

impl TestClass {
    /// Clase vacía; `class` es el identificador que transforma el generador.
    pub fn new(class: impl Into<String>) -> Self {
        Self { class: class.into(), display_name: None, generator: None, members: Vec::new() }
    }

    /// Nombre visible explícito de la clase.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Generador de nombres para esta clase y sus clases anidadas.
    pub fn generator<G>(mut self, generator: G) -> Self
        where G: DisplayNameGenerator + 'static
    {
        self.generator = Some(Arc::new(generator));
        self
    }

    /// Método de prueba simple.
    pub fn test<F>(mut self, method: impl Into<String>, body: F) -> Self
        where F: FnOnce() -> TestOutcome + 'static
    {
        self.members.push(Member::Test { method: method.into(), display_name: None, body: Box::new(body) });
        self
    }

    /// Método de prueba con nombre visible explícito.
    pub fn test_named<F>(mut self, method: impl Into<String>, display_name: impl Into<String>, body: F) -> Self
        where F: FnOnce() -> TestOutcome + 'static
    {
        self.members.push(Member::Test { method: method.into(), display_name: Some(display_name.into()), body: Box::new(body) });
        self
    }

    /// Factory de tests dinámicos; se invoca cuando el runner llega a ella.
    pub fn factory<F>(mut self, method: impl Into<String>, factory: F) -> Self
        where F: FnOnce() -> Result<NodeSource, CaseError> + 'static
    {
        self.members.push(Member::Factory { method: method.into(), display_name: None, factory: Box::new(factory) });
        self
    }

    pub fn parameterized(mut self, test: ParameterizedTest) -> Self {
        self.members.push(Member::Parameterized(test));
        self
    }

    pub fn repeated(mut self, test: RepeatedTest) -> Self {
        self.members.push(Member::Repeated(test));
        self
    }

    /// Clase anidada; hereda el generador salvo que declare el suyo.
    pub fn nested(mut self, class: TestClass) -> Self {
        self.members.push(Member::Nested(class));
        self
    }

    /// Contenedor de la clase con `Standard` como generador por defecto. Los
    /// miembros se construyen al pedir cada hijo.
    pub fn build(self, engine: &CaseEngine) -> DynamicContainer {
        self.build_with(engine, Arc::new(Standard), false)
    }

    fn build_with(self, engine: &CaseEngine, inherited: Arc<dyn DisplayNameGenerator>, nested: bool) -> DynamicContainer {
        let generator = self.generator.unwrap_or(inherited);
        let name = match self.display_name {
            Some(name) => name,
            None if nested => generator.nested_class_name(&self.class),
            None => generator.class_name(&self.class),
        };
        debug!("test class '{}' as '{name}' with {} member(s)", self.class, self.members.len());
        let class = self.class;
        let engine = engine.clone();
        let children = self.members
                           .into_iter()
                           .map(move |member| build_member(member, &class, &engine, &generator));
        DynamicContainer::from_stream(name, Box::new(children))
    }
}

fn build_member(member: Member,
                class: &str,
                engine: &CaseEngine,
                generator: &Arc<dyn DisplayNameGenerator>)
                -> Result<DynamicNode, CaseError> {
    match member {
        Member::Test { method, display_name, body } => {
            let name = display_name.unwrap_or_else(|| generator.method_name(class, &method, &[]));
            Ok(DynamicTest::new(name, body).into())
        }
        Member::Factory { method, display_name, factory } => {
            let name = display_name.unwrap_or_else(|| generator.method_name(class, &method, &[]));
            let children: NodeStream = Box::new(std::iter::once_with(factory).flat_map(|source| -> NodeStream {
                                                                                     match source {
                                                                                         Ok(source) => build_tree(source),
                                                                                         Err(e) => Box::new(std::iter::once(Err(e))),
                                                                                     }
                                                                                 }));
            Ok(DynamicContainer::from_stream(name, children).into())
        }
        Member::Parameterized(test) => {
            let name = generator.method_name(class, test.method(), &test.parameter_types());
            Ok(test.build_named(engine, &name)?.into())
        }
        Member::Repeated(test) => {
            let name = generator.method_name(class, test.method(), &[]);
            Ok(test.build_named(engine, &name)?.into())
        }
        Member::Nested(nested) => Ok(nested.build_with(engine, generator.clone(), true).into()),
    }
}
