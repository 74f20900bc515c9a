use case_core::{ParameterSlot, SourceDescriptor, TargetType, TestClass};
use serde_json::Value;

use super::parameterized;
use crate::config::AppConfig;

pub fn classes(config: &AppConfig) -> Vec<TestClass> {
    let one_param = parameterized("argumentsSourceOneParam", config)
        .slot(ParameterSlot::of(TargetType::Str))
        .source(SourceDescriptor::provider("SingleParamArgumentsProvider", Value::Null))
        .body(|args| {
            let argument: Option<String> = args.value(0)?;
            assert!(argument.is_some());
            Ok(())
        });
    let multi_params = parameterized("argumentsSourceMultiParams", config)
        .slots([ParameterSlot::of(TargetType::Str), ParameterSlot::of(TargetType::Int), ParameterSlot::of(TargetType::List)])
        .source(SourceDescriptor::provider("MultiParamsArgumentsProvider", Value::Null))
        .body(|args| {
            let five_letters: String = args.value(0)?;
            let one_or_two: i32 = args.value(1)?;
            let size_two: Vec<String> = args.value(2)?;
            assert_eq!(five_letters.len(), 5);
            assert!((1..=2).contains(&one_or_two));
            assert_eq!(size_two.len(), 2);
            Ok(())
        });
    vec![TestClass::new("ArgumentsSourceTests").parameterized(one_param).parameterized(multi_params)]
}
