use case_core::{ArgumentType, ParameterSlot, SourceDescriptor, TestClass};
use case_domain::{Rank, TemporalUnit};

use super::parameterized;
use crate::config::AppConfig;

pub fn classes(config: &AppConfig) -> Vec<TestClass> {
    let ranks = parameterized("compareRanks", config)
        .slot(ParameterSlot::of(Rank::target_type()))
        .source(SourceDescriptor::enum_excluding("Rank", ["PRIVATE"]))
        .body(|args| {
            let rank: Rank = args.value(0)?;
            assert!(Rank::Private < rank);
            Ok(())
        });
    let units = parameterized("enumSourceWithValue", config)
        .slot(ParameterSlot::of(TemporalUnit::target_type()))
        .source(SourceDescriptor::enum_values("TemporalUnit"))
        .body(|args| {
            let _unit: TemporalUnit = args.value(0)?;
            Ok(())
        });
    vec![TestClass::new("EnumSourceTests").parameterized(ranks).parameterized(units)]
}
