use case_core::{BoundArguments, ParameterSlot, SourceDescriptor, TargetType, TestClass, TestOutcome};

use super::parameterized;
use crate::config::AppConfig;

fn not_null(args: &BoundArguments) -> TestOutcome {
    let argument: Option<String> = args.value(0)?;
    assert!(argument.is_some());
    Ok(())
}

fn string_int_and_list_slots() -> [ParameterSlot; 3] {
    [ParameterSlot::of(TargetType::Str), ParameterSlot::of(TargetType::Int), ParameterSlot::of(TargetType::List)]
}

fn string_int_and_list(args: &BoundArguments) -> TestOutcome {
    let five_letters: String = args.value(0)?;
    let one_or_two: i32 = args.value(1)?;
    let size_two: Vec<String> = args.value(2)?;
    assert_eq!(five_letters.len(), 5);
    assert!((1..=2).contains(&one_or_two));
    assert_eq!(size_two.len(), 2);
    Ok(())
}

pub fn classes(config: &AppConfig) -> Vec<TestClass> {
    let string = || ParameterSlot::of(TargetType::Str);
    let class = TestClass::new("MethodSourceTests")
        .parameterized(parameterized("explicitLocalMethodSourceStream", config).slot(string())
                                                                                .source(SourceDescriptor::factory("stringProviderStream"))
                                                                                .body(not_null))
        .parameterized(parameterized("explicitLocalMethodSourceArray", config).slot(string())
                                                                               .source(SourceDescriptor::factory("stringProviderArray"))
                                                                               .body(not_null))
        .parameterized(parameterized("testWithDefaultLocalMethodSource", config).slot(string())
                                                                                 .source(SourceDescriptor::default_factory())
                                                                                 .body(not_null))
        .parameterized(parameterized("testOddIntegers", config).slot(ParameterSlot::of(TargetType::Int))
                                                                .source(SourceDescriptor::factory("oddRange"))
                                                                .body(|args| {
                                                                    let number: i32 = args.value(0)?;
                                                                    assert_eq!(number % 2, 1);
                                                                    Ok(())
                                                                }))
        .parameterized(parameterized("multiArgArgumentsStream", config).slots(string_int_and_list_slots())
                                                                        .source(SourceDescriptor::factory("stringIntAndListArgumentsStream"))
                                                                        .body(string_int_and_list))
        .parameterized(parameterized("multiArgArray", config).slots(string_int_and_list_slots())
                                                              .source(SourceDescriptor::factory("stringIntAndListArray"))
                                                              .body(string_int_and_list));
    vec![class]
}
