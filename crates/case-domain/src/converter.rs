use case_core::{ArgValue, ArgumentConverter, TargetType};

/// Convierte cualquier valor a su forma textual; los miembros de enums a su
/// nombre. Solo produce `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToStringConverter;

impl ArgumentConverter for ToStringConverter {
    fn convert(&self, source: &ArgValue, target: &TargetType) -> Result<ArgValue, String> {
        if *target != TargetType::Str {
            return Err(format!("can only convert to String, not {target}"));
        }
        Ok(match source {
            ArgValue::Enum(member) => ArgValue::Str(member.name.to_string()),
            ArgValue::Null => ArgValue::Str("null".to_string()),
            other => ArgValue::Str(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TemporalUnit;

    #[test]
    fn enums_become_their_names() {
        let converted = ToStringConverter.convert(&TemporalUnit::HalfDays.into(), &TargetType::Str);
        assert_eq!(converted, Ok(ArgValue::from("HALF_DAYS")));
        assert!(ToStringConverter.convert(&ArgValue::from(1), &TargetType::Int).is_err());
    }
}
