use std::rc::Rc;

use log::debug;

use super::invalid;
use crate::binding;
use crate::constants::DEFAULT_DISPLAY_NAME_TEMPLATE;
use crate::engine::CaseEngine;
use crate::errors::{CaseError, RenderError};
use crate::model::{BoundArguments, ParameterSlot, TargetType};
use crate::naming::{NameTemplate, RenderContext};
use crate::source::{ResolveContext, SourceDescriptor};
use crate::tree::{DynamicContainer, DynamicNode, DynamicTest, NodeStream, TestOutcome};

/// Cuerpo de un caso parametrizado.
pub type CaseBody = Rc<dyn Fn(&BoundArguments) -> TestOutcome>;

const KIND: &str = "parameterized_test";

/// Caso parametrizado: fuente(s) -> filas -> ligado -> nombre -> hoja.
///
/// Declarar varias fuentes equivale a su unión en orden de declaración.
#[derive(Clone)]
pub struct ParameterizedTest {
    method: String,
    display_name: Option<String>,
    template: Option<String>,
    slots: Vec<ParameterSlot>,
    sources: Vec<SourceDescriptor>,
    body: Option<CaseBody>,
}

impl ParameterizedTest {
    /// Caso sin parámetros ni fuentes; `method` es el nombre del método de
    /// prueba y el nombre por defecto de la factory asociada.
    pub fn new(method: impl Into<String>) -> Self {
        Self { method: method.into(),
               display_name: None,
               template: None,
               slots: Vec::new(),
               sources: Vec::new(),
               body: None }
    }

    /// Nombre visible del contenedor; tiene prioridad sobre cualquier
    /// `DisplayNameGenerator`.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Plantilla por caso. Por defecto `[{index}] {arguments}`.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Añade un parámetro al final de la lista.
    pub fn slot(mut self, slot: ParameterSlot) -> Self {
        self.slots.push(slot);
        self
    }

    pub fn slots<I: IntoIterator<Item = ParameterSlot>>(mut self, slots: I) -> Self {
        self.slots.extend(slots);
        self
    }

    /// Añade una fuente de argumentos.
    pub fn source(mut self, descriptor: SourceDescriptor) -> Self {
        self.sources.push(descriptor);
        self
    }

    /// Cuerpo ejecutado una vez por fila con los argumentos ya ligados.
    pub fn body<F>(mut self, body: F) -> Self
        where F: Fn(&BoundArguments) -> TestOutcome + 'static
    {
        self.body = Some(Rc::new(body));
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Tipos declarados, en orden; los usa `Standard` para `metodo(Tipos)`.
    pub fn parameter_types(&self) -> Vec<TargetType> {
        self.slots.iter().map(|s| s.target().clone()).collect()
    }

    /// Fuente efectiva: la única declarada o la unión de todas.
    pub fn descriptor(&self) -> Option<SourceDescriptor> {
        match self.sources.as_slice() {
            [] => None,
            [single] => Some(single.clone()),
            many => Some(SourceDescriptor::union(many.iter().cloned())),
        }
    }

    /// Valida plantilla, parámetros y fuente y devuelve el contenedor. Las
    /// filas se resuelven, ligan y nombran a medida que se piden los hijos.
    pub fn build(&self, engine: &CaseEngine) -> Result<DynamicContainer, CaseError> {
        self.build_named(engine, &self.method)
    }

    /// Como `build`, con `fallback_name` como nombre visible si no se declaró
    /// uno explícito.
    pub fn build_named(&self, engine: &CaseEngine, fallback_name: &str) -> Result<DynamicContainer, CaseError> {
        let display_name = self.display_name.clone().unwrap_or_else(|| fallback_name.to_string());
        let template = NameTemplate::parse(self.template.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME_TEMPLATE))?;
        if template.uses_repetition() {
            return Err(RenderError::MissingContext { template: template.as_str().to_string(), name: "currentRepetition".into() }.into());
        }
        let body = self.body.clone().ok_or_else(|| invalid(KIND, format!("'{}' declares no body", self.method)))?;
        let descriptor = self.descriptor().ok_or_else(|| invalid(KIND, format!("'{}' declares no argument source", self.method)))?;
        binding::validate_slots(&self.slots)?;
        let rows = engine.resolve(&descriptor, &ResolveContext::new(self.method.clone()))?;
        debug!("parameterized test '{display_name}' from {} source", descriptor.kind_name());

        let slots = self.slots.clone();
        let conversions = engine.conversions().clone();
        let name = display_name.clone();
        let mut failed = false;
        let children: NodeStream = Box::new(rows.map_while(move |row| {
                                                    if failed {
                                                        return None;
                                                    }
                                                    let node = row.map_err(CaseError::from).and_then(|row| {
                                                                                               let bound = binding::bind(&row, &slots, &conversions)?;
                                                                                               let case_name = template.render(&RenderContext::for_case(&name,
                                                                                                                                                        bound.index(),
                                                                                                                                                        bound.values()))
                                                                                                              .map_err(|e| CaseError::case_name(bound.index(), e))?;
                                                                                               let body = body.clone();
                                                                                               Ok(DynamicNode::from(DynamicTest::new(case_name, move || body(&bound))))
                                                                                           });
                                                    failed = node.is_err();
                                                    Some(node)
                                                }));
        Ok(DynamicContainer::from_stream(display_name, children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SourceError;
    use crate::model::ArgValue;

    fn names(container: DynamicContainer) -> Vec<Result<String, CaseError>> {
        container.into_children().map(|n| n.map(|n| n.name().to_string())).collect()
    }

    #[test]
    fn default_template_lists_index_and_arguments() {
        let test = ParameterizedTest::new("palindromes").slot(ParameterSlot::of(TargetType::Str))
                                                         .source(SourceDescriptor::strings(["racecar", "radar"]))
                                                         .body(|_| Ok(()));
        let container = test.build(&CaseEngine::default()).expect("valid");
        assert_eq!(container.name().as_str(), "palindromes");
        assert_eq!(names(container), vec![Ok("[1] racecar".to_string()), Ok("[2] radar".to_string())]);
    }

    #[test]
    fn doubles_keep_their_fraction_in_names() {
        let test = ParameterizedTest::new("doubles").slot(ParameterSlot::of(TargetType::Double))
                                                    .source(SourceDescriptor::csv(["1", "2.5"]))
                                                    .body(|_| Ok(()));
        let built = names(test.build(&CaseEngine::default()).expect("valid"));
        assert_eq!(built, vec![Ok("[1] 1.0".to_string()), Ok("[2] 2.5".to_string())]);
    }

    #[test]
    fn several_sources_are_concatenated() {
        let test = ParameterizedTest::new("union").display_name("Union")
                                                  .template("{displayName} #{index}: {0}")
                                                  .slot(ParameterSlot::of(TargetType::Long))
                                                  .source(SourceDescriptor::ints([1, 2]))
                                                  .source(SourceDescriptor::csv(["3"]))
                                                  .body(|_| Ok(()));
        let built = names(test.build(&CaseEngine::default()).expect("valid"));
        assert_eq!(built,
                   vec![Ok("Union #1: 1".to_string()), Ok("Union #2: 2".to_string()), Ok("Union #1: 3".to_string())]);
    }

    #[test]
    fn declaration_errors_are_reported_at_build_time() {
        let engine = CaseEngine::default();
        let no_body = ParameterizedTest::new("x").source(SourceDescriptor::strings(["a"]));
        assert!(matches!(no_body.build(&engine), Err(CaseError::Source(SourceError::InvalidConfiguration { .. }))));
        let no_source = ParameterizedTest::new("x").body(|_| Ok(()));
        assert!(no_source.build(&engine).is_err());
        let bad_template = ParameterizedTest::new("x").template("{oops}").source(SourceDescriptor::strings(["a"])).body(|_| Ok(()));
        assert!(matches!(bad_template.build(&engine), Err(CaseError::Render(RenderError::UnknownPlaceholder { .. }))));
        let repetition = ParameterizedTest::new("x").template("{currentRepetition}")
                                                    .source(SourceDescriptor::strings(["a"]))
                                                    .body(|_| Ok(()));
        assert!(matches!(repetition.build(&engine), Err(CaseError::Render(RenderError::MissingContext { .. }))));
    }

    #[test]
    fn a_failing_row_ends_the_container() {
        let test = ParameterizedTest::new("ints").slot(ParameterSlot::of(TargetType::Int))
                                                 .source(SourceDescriptor::strings(["1", "x", "3"]))
                                                 .body(|_| Ok(()));
        let built = names(test.build(&CaseEngine::default()).expect("valid"));
        assert_eq!(built.len(), 2);
        assert!(matches!(built[1], Err(CaseError::Conversion(_))));
    }

    #[test]
    fn render_failures_name_the_offending_row() {
        let test = ParameterizedTest::new("pairs").template("[{index}] {1}")
                                                  .slot(ParameterSlot::of(TargetType::Str))
                                                  .source(SourceDescriptor::csv(["a, b", "c"]))
                                                  .body(|_| Ok(()));
        let built = names(test.build(&CaseEngine::default()).expect("valid"));
        assert_eq!(built.len(), 1);
        match &built[0] {
            Err(CaseError::CaseName { row_index, source }) => {
                assert_eq!(*row_index, 1);
                assert_eq!(*source, RenderError::ArgumentOutOfRange { template: "[{index}] {1}".into(), index: 1, len: 1 });
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn null_arguments_in_names_are_render_errors() {
        let test = ParameterizedTest::new("nulls").slot(ParameterSlot::of(TargetType::Str))
                                                  .source(SourceDescriptor::strings(["a"]).with_null_and_empty(true, false))
                                                  .body(|args| {
                                                      assert_eq!(args.get(0), Some(&ArgValue::Null));
                                                      Ok(())
                                                  });
        let built = names(test.build(&CaseEngine::default()).expect("valid"));
        assert!(matches!(built.as_slice(), [Err(CaseError::CaseName { row_index: 1, source: RenderError::NullArgument { .. } })]));
    }
}
