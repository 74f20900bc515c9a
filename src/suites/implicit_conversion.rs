use case_core::{ParameterSlot, SourceDescriptor, TargetType, TestClass};
use case_domain::Book;

use super::parameterized;
use crate::config::AppConfig;

pub fn classes(config: &AppConfig) -> Vec<TestClass> {
    let test = parameterized("implicitFallbackArgumentConversion", config)
        .slot(ParameterSlot::of(TargetType::Object(Book::TYPE_NAME.to_string())))
        .source(SourceDescriptor::strings(["42 Cats"]))
        .body(|args| {
            let book: &Book = args.object(0)?;
            assert_eq!(book.title(), "42 Cats");
            Ok(())
        });
    vec![TestClass::new("ImplicitStringToObjectConversion").parameterized(test)]
}
