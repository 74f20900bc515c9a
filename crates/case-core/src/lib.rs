//! case-core: generación declarativa de casos de prueba.
//!
//! Convierte una descripción declarativa de entradas (filas CSV, miembros de
//! enums, factories, providers) en un árbol nombrado de casos ejecutables:
//! - `source`: resuelve un `SourceDescriptor` en una secuencia perezosa de
//!   `ArgumentRow`.
//! - `convert` / `aggregate` / `binding`: ligan cada fila a los parámetros
//!   declarados (`ParameterSlot`).
//! - `naming`: plantillas por caso y transformación de identificadores.
//! - `tree`: nodos dinámicos (hojas y contenedores) construidos de forma
//!   perezosa.
//! - `cases`: builders de alto nivel (parametrizados, repetidos, clases).
//! - `runner`: runner en memoria que consume el árbol (colaborador externo).
pub mod aggregate;
pub mod binding;
pub mod cases;
pub mod constants;
pub mod convert;
pub mod engine;
pub mod errors;
pub mod macros;
pub mod model;
pub mod naming;
pub mod runner;
pub mod source;
pub mod tree;

pub use aggregate::{ArgumentsAccessor, ArgumentsAggregator, SlotContext};
pub use binding::bind;
pub use cases::{ParameterizedTest, RepeatedTest, TestClass};
pub use convert::{ArgumentConverter, ArgumentType, ConversionService};
pub use engine::{CaseEngine, CaseEngineBuilder};
pub use errors::{AggregationError, CaseError, ConversionError, RenderError, SourceError};
pub use model::{ArgValue, ArgumentEnum, ArgumentRow, Arguments, BoundArguments, EnumMember, Opaque, ParameterSlot, RepetitionInfo, TargetType};
pub use naming::{DisplayNameGenerator, NameTemplate, RenderContext};
pub use runner::{HostRunner, InMemoryRunner, RunSummary};
pub use source::{ArgumentResolver, ArgumentsProvider, FactoryItem, FactoryOutput, ProviderContext, ResourceLoader, SourceDescriptor};
pub use tree::{DisplayName, DynamicContainer, DynamicNode, DynamicTest, NodeSource, NodeStream, Producer, TestOutcome};

#[cfg(test)]
mod tests {
	use super::*;
	use crate::runner::RunEventKind;

	argument_enum! {
		enum Fruit as "Fruit" {
			Apple => "APPLE",
			Banana => "BANANA",
			Lemon => "LEMON",
		}
	}

	fn engine() -> CaseEngine {
		CaseEngine::builder().enum_type::<Fruit>().build()
	}

	#[test]
	fn parameterized_csv_cases_run_through_the_in_memory_runner() {
		let test = ParameterizedTest::new("ranked")
			.template("{index} => ''{0}'' is ranked {1} ({arguments})")
			.slot(ParameterSlot::of(TargetType::Str))
			.slot(ParameterSlot::of(TargetType::Int))
			.source(SourceDescriptor::csv(["apple, 1", "banana, 2", "'lemon, lime', 3"]))
			.body(|args| {
				let rank: i32 = args.value(1)?;
				assert!(rank > 0);
				Ok(())
			});

		let container = test.build(&engine()).expect("valid parameterized test");
		let mut runner = InMemoryRunner::default();
		let summary = runner.run(container.into());

		assert_eq!(summary.passed, 3);
		assert_eq!(summary.failed, 0);
		let names: Vec<&str> = runner.events()
		                             .iter()
		                             .filter(|e| matches!(e.kind, RunEventKind::TestFinished { .. }))
		                             .map(|e| e.name.as_str())
		                             .collect();
		assert_eq!(names,
		           vec!["1 => 'apple' is ranked 1 (apple, 1)",
		                "2 => 'banana' is ranked 2 (banana, 2)",
		                "3 => 'lemon, lime' is ranked 3 (lemon, lime, 3)"]);
	}

	#[test]
	fn enum_cases_bind_typed_members() {
		let test = ParameterizedTest::new("fruits")
			.slot(ParameterSlot::of(TargetType::Enum("Fruit".into())))
			.source(SourceDescriptor::enum_excluding("Fruit", ["BANANA"]))
			.body(|args| {
				let fruit: Fruit = args.value(0)?;
				assert_ne!(fruit, Fruit::Banana);
				Ok(())
			});

		let mut runner = InMemoryRunner::default();
		let summary = runner.run(test.build(&engine()).expect("build").into());
		assert_eq!(summary.passed, 2);
		assert_eq!(summary.errored, 0);
	}
}
