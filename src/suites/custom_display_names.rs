use case_core::{ParameterSlot, ParameterizedTest, SourceDescriptor, TargetType, TestClass};

use crate::config::AppConfig;

pub const TEMPLATE: &str = "{index} => ''{0}'' is ranked {1} ({arguments})";

pub fn classes(_config: &AppConfig) -> Vec<TestClass> {
    let test = ParameterizedTest::new("testWithCustomDisplayNames")
        .display_name("Display name of container")
        .template(TEMPLATE)
        .slots([ParameterSlot::of(TargetType::Str), ParameterSlot::of(TargetType::Int)])
        .source(SourceDescriptor::csv(["apple, 1", "banana, 2", "'lemon, lime', 3"]))
        .body(|_| Ok(()));
    vec![TestClass::new("CustomDisplayNames").parameterized(test)]
}
