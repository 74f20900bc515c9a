use case_core::{ParameterSlot, SourceDescriptor, TargetType, TestClass};

use super::parameterized;
use crate::config::AppConfig;

pub const RESOURCE: &str = "/csv_file_resource.csv";

pub fn classes(config: &AppConfig) -> Vec<TestClass> {
    let test = parameterized("testWithCsvFileSource", config)
        .slots([ParameterSlot::of(TargetType::Str), ParameterSlot::of(TargetType::Int)])
        .source(SourceDescriptor::csv_resource([RESOURCE], 1))
        .body(|args| {
            let country: String = args.value(0)?;
            let letters: i32 = args.value(1)?;
            assert_eq!(country.chars().count(), usize::try_from(letters)?);
            Ok(())
        });
    vec![TestClass::new("CsvFileSourceTests").parameterized(test)]
}
