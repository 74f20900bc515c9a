use std::sync::Arc;

use case_core::{ArgumentsAggregator, ParameterSlot, SourceDescriptor, TestClass};
use case_domain::{Gender, Person, PersonAggregator};

use super::parameterized;
use crate::config::AppConfig;

const PEOPLE: [&str; 2] = ["Jane, Doe, F, 1990-05-20", "John, Doe, M, 1990-10-22"];

pub fn classes(config: &AppConfig) -> Vec<TestClass> {
    // Una sola instancia compartida por los dos tests que agregan personas.
    let to_person: Arc<dyn ArgumentsAggregator> = Arc::new(PersonAggregator);

    let accessor = parameterized("argumentsAccessor", config)
        .slot(ParameterSlot::accessor())
        .source(SourceDescriptor::csv(PEOPLE))
        .body(|args| {
            let person = Person::from_accessor(args.accessor(0)?)?;
            let expected = if person.first_name() == "Jane" { Gender::F } else { Gender::M };
            assert_eq!(person.gender(), expected);
            assert_eq!(person.last_name(), "Doe");
            assert_eq!(person.birth_year(), 1990);
            Ok(())
        });
    let aggregator = parameterized("customArgumentsAggregator", config)
        .slot(ParameterSlot::aggregated(Person::target_type(), to_person.clone()))
        .source(SourceDescriptor::csv(PEOPLE))
        .body(|args| {
            let person: &Person = args.object(0)?;
            assert_eq!(person.last_name(), "Doe");
            Ok(())
        });
    let reused = parameterized("customAggregatorAnnotation", config)
        .slot(ParameterSlot::aggregated(Person::target_type(), to_person))
        .source(SourceDescriptor::csv(PEOPLE))
        .body(|args| {
            let person: &Person = args.object(0)?;
            assert_eq!(person.birth_year(), 1990);
            Ok(())
        });
    vec![TestClass::new("ArgumentAggregation").parameterized(accessor).parameterized(aggregator).parameterized(reused)]
}
