use std::rc::Rc;

use super::invalid;
use crate::constants::DEFAULT_REPETITION_TEMPLATE;
use crate::engine::CaseEngine;
use crate::errors::CaseError;
use crate::model::RepetitionInfo;
use crate::naming::{NameTemplate, RenderContext};
use crate::tree::{DynamicContainer, DynamicNode, DynamicTest, TestOutcome};

/// Cuerpo de un caso repetido.
pub type RepetitionBody = Rc<dyn Fn(RepetitionInfo) -> TestOutcome>;

const KIND: &str = "repeated_test";

/// Caso ejecutado `total` veces, una hoja por repetición.
#[derive(Clone)]
pub struct RepeatedTest {
    method: String,
    display_name: Option<String>,
    total: usize,
    template: Option<String>,
    body: Option<RepetitionBody>,
}

impl RepeatedTest {
    /// `total` debe ser mayor que cero; se comprueba en `build`.
    pub fn new(method: impl Into<String>, total: usize) -> Self {
        Self { method: method.into(), display_name: None, total, template: None, body: None }
    }

    /// Nombre visible del contenedor.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Plantilla por repetición. Por defecto
    /// `repetition {currentRepetition} of {totalRepetitions}`.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Cuerpo ejecutado en cada repetición con su `RepetitionInfo`.
    pub fn body<F>(mut self, body: F) -> Self
        where F: Fn(RepetitionInfo) -> TestOutcome + 'static
    {
        self.body = Some(Rc::new(body));
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Contenedor con una hoja por repetición, creadas bajo demanda.
    pub fn build(&self, engine: &CaseEngine) -> Result<DynamicContainer, CaseError> {
        self.build_named(engine, &self.method)
    }

    /// Como `build`, con `fallback_name` como nombre visible si no se declaró
    /// uno explícito. La plantilla se valida renderizando la primera
    /// repetición.
    pub fn build_named(&self, _engine: &CaseEngine, fallback_name: &str) -> Result<DynamicContainer, CaseError> {
        if self.total == 0 {
            return Err(invalid(KIND, format!("'{}' must repeat at least once", self.method)).into());
        }
        let display_name = self.display_name.clone().unwrap_or_else(|| fallback_name.to_string());
        let template = NameTemplate::parse(self.template.as_deref().unwrap_or(DEFAULT_REPETITION_TEMPLATE))?;
        // Las plantillas con argumentos fallan aquí y no en la primera hoja.
        template.render(&RenderContext::for_repetition(&display_name, RepetitionInfo { current: 1, total: self.total }))?;
        let body = self.body.clone().ok_or_else(|| invalid(KIND, format!("'{}' declares no body", self.method)))?;

        let total = self.total;
        let name = display_name.clone();
        let children = (1..=total).map(move |current| -> Result<DynamicNode, CaseError> {
                                      let info = RepetitionInfo { current, total };
                                      let case_name = template.render(&RenderContext::for_repetition(&name, info))
                                                              .map_err(|e| CaseError::case_name(current, e))?;
                                      let body = body.clone();
                                      Ok(DynamicNode::from(DynamicTest::new(case_name, move || body(info))))
                                  });
        Ok(DynamicContainer::from_stream(display_name, Box::new(children)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_leaf_per_repetition() {
        let test = RepeatedTest::new("customDisplayName", 3).display_name("Repeat!")
                                                            .template("{displayName} {currentRepetition}/{totalRepetitions}")
                                                            .body(|info| if info.current <= info.total { Ok(()) } else { Err("overflow".into()) });
        let container = test.build(&CaseEngine::default()).expect("valid");
        let names: Vec<String> = container.into_children().map(|n| n.expect("node").name().to_string()).collect();
        assert_eq!(names, vec!["Repeat! 1/3", "Repeat! 2/3", "Repeat! 3/3"]);
    }

    #[test]
    fn default_template_and_invalid_counts() {
        let engine = CaseEngine::default();
        let test = RepeatedTest::new("twice", 2).body(|_| Ok(()));
        let first = test.build(&engine).expect("valid").into_children().next().expect("one").expect("node");
        assert_eq!(first.name().as_str(), "repetition 1 of 2");
        assert!(RepeatedTest::new("never", 0).body(|_| Ok(())).build(&engine).is_err());
        assert!(RepeatedTest::new("args", 1).template("{0}").body(|_| Ok(())).build(&engine).is_err());
    }
}
