use case_core::source::CsvFormat;
use case_core::{ParameterSlot, SourceDescriptor, TargetType, TestClass};

use super::parameterized;
use crate::config::AppConfig;

fn fruit_and_rank() -> [ParameterSlot; 2] {
    [ParameterSlot::of(TargetType::Str), ParameterSlot::of(TargetType::Int)]
}

pub fn classes(config: &AppConfig) -> Vec<TestClass> {
    let default = parameterized("csvSourceDefault", config)
        .slots(fruit_and_rank())
        .source(SourceDescriptor::csv(["apple, 1", "banana, 2", "'lemon, lime', 0xF1"]))
        .body(|args| {
            let rank: i32 = args.value(1)?;
            assert_ne!(rank, 0);
            Ok(())
        });
    let delimiter = parameterized("csvSourceDelimiter", config)
        .template("[{index}] rank {1}")
        .slots(fruit_and_rank())
        .source(SourceDescriptor::csv_with(["apple | 1", "| 2", "lemon, lime | 1"], CsvFormat::default().delimiter('|')))
        .body(|args| {
            let fruit: Option<String> = args.value(0)?;
            if fruit.is_none() {
                // sin fruta no hay nada que comprobar
                return Ok(());
            }
            let rank: i32 = args.value(1)?;
            assert_ne!(rank, 0);
            Ok(())
        });
    let null_or_empty = parameterized("csvSourceNullOrEmpty", config)
        .template("[{index}] rank {1}")
        .slots(fruit_and_rank())
        .source(SourceDescriptor::csv_with(["NIL, 1", "N/A, 2", "'', 3"],
                                           CsvFormat::default().null_values(["NIL", "N/A"]).empty_value("-")))
        .body(|args| {
            let fruit: Option<String> = args.value(0)?;
            assert!(fruit.as_deref().map_or(true, |f| f == "-"));
            let rank: i32 = args.value(1)?;
            assert_ne!(rank, 0);
            Ok(())
        });
    vec![TestClass::new("CsvSourceTests").parameterized(default).parameterized(delimiter).parameterized(null_or_empty)]
}
