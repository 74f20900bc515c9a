use case_core::{ParameterSlot, SourceDescriptor, TargetType, TestClass};
use case_domain::is_palindrome;

use super::parameterized;
use crate::config::AppConfig;

fn palindrome_body(args: &case_core::BoundArguments) -> case_core::TestOutcome {
    let candidate: Option<String> = args.value(0)?;
    assert!(is_palindrome(candidate.as_deref()), "{candidate:?} is not a palindrome");
    Ok(())
}

pub fn classes(config: &AppConfig) -> Vec<TestClass> {
    let palindromes = parameterized("palindromes", config).slot(ParameterSlot::of(TargetType::Str))
                                                          .source(SourceDescriptor::strings(["racecar", "radar", "able was I ere I saw elba"]))
                                                          .body(palindrome_body);
    // null no se puede renderizar; el nombre solo lleva el índice
    let blanks = parameterized("palindromesWithNullEmptyAndBlanks", config)
        .template("[{index}] blank candidate")
        .slot(ParameterSlot::of(TargetType::Str))
        .source(SourceDescriptor::strings([" ", "   ", "\t", "\n"]).with_null_and_empty(true, true))
        .body(palindrome_body);
    vec![TestClass::new("ValueSourceTests").parameterized(palindromes).parameterized(blanks)]
}
