use case_core::naming::{IndicativeSentences, ReplaceUnderscores};
use case_core::TestClass;

use crate::config::AppConfig;

pub fn classes(_config: &AppConfig) -> Vec<TestClass> {
    let explicit = TestClass::new("DisplayNameDemo")
        .display_name("Demonstrate use of @DisplayName")
        .test_named("testWithDisplayNameContainingSpaces", "Custom test name containing spaces", || Ok(()))
        .test_named("testWithDisplayNameContainingSpecialCharacters", "╯°□°）╯", || Ok(()))
        .test_named("testWithDisplayNameContainingEmoji", "😱", || Ok(()));
    let underscores = TestClass::new("DisplayNameGeneratorReplaceUnderscores")
        .generator(ReplaceUnderscores)
        .test("test_spaces_ok", || Ok(()))
        .test("test_spaces_fail", || Ok(()));
    let sentences = TestClass::new("CustomDisplayNameGenerator")
        .generator(IndicativeSentences)
        .test("camelCaseName", || Ok(()));
    vec![explicit, underscores, sentences]
}
