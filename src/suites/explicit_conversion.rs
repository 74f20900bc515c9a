use case_core::{ArgumentEnum, ParameterSlot, SourceDescriptor, TargetType, TestClass};
use case_domain::{TemporalUnit, ToStringConverter};

use super::parameterized;
use crate::config::AppConfig;

pub fn classes(config: &AppConfig) -> Vec<TestClass> {
    let test = parameterized("explicitArgumentConversion", config)
        .slot(ParameterSlot::converted(TargetType::Str, ToStringConverter))
        .source(SourceDescriptor::enum_values("TemporalUnit"))
        .body(|args| {
            let argument: String = args.value(0)?;
            assert!(TemporalUnit::from_name(&argument).is_some(), "{argument} is not a temporal unit");
            Ok(())
        });
    vec![TestClass::new("ExplicitConversion").parameterized(test)]
}
