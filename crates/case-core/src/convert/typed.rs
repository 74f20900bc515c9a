use chrono::NaiveDate;

use crate::model::{ArgValue, TargetType};

/// Tipo Rust que puede extraerse de un `ArgValue` ya ligado.
///
/// `argument_enum!` implementa este trait para cada enumeración declarada.
pub trait ArgumentType: Sized {
    fn target_type() -> TargetType;

    fn from_value(value: &ArgValue) -> Result<Self, String>;
}

fn mismatch(value: &ArgValue, expected: &str) -> String {
    format!("expected {expected}, found {}", value.type_label())
}

impl ArgumentType for String {
    fn target_type() -> TargetType {
        TargetType::Str
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        match value {
            ArgValue::Str(s) => Ok(s.clone()),
            other => Err(mismatch(other, "String")),
        }
    }
}

impl ArgumentType for bool {
    fn target_type() -> TargetType {
        TargetType::Bool
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        match value {
            ArgValue::Bool(b) => Ok(*b),
            other => Err(mismatch(other, "bool")),
        }
    }
}

impl ArgumentType for char {
    fn target_type() -> TargetType {
        TargetType::Char
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        match value {
            ArgValue::Char(c) => Ok(*c),
            other => Err(mismatch(other, "char")),
        }
    }
}

impl ArgumentType for i32 {
    fn target_type() -> TargetType {
        TargetType::Int
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        match value {
            ArgValue::Int(i) => i32::try_from(*i).map_err(|_| format!("{i} is out of range for i32")),
            other => Err(mismatch(other, "i32")),
        }
    }
}

impl ArgumentType for i64 {
    fn target_type() -> TargetType {
        TargetType::Long
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        match value {
            ArgValue::Int(i) => Ok(*i),
            other => Err(mismatch(other, "i64")),
        }
    }
}

impl ArgumentType for f64 {
    fn target_type() -> TargetType {
        TargetType::Double
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        match value {
            ArgValue::Float(x) => Ok(*x),
            ArgValue::Int(i) => Ok(*i as f64),
            other => Err(mismatch(other, "f64")),
        }
    }
}

impl ArgumentType for NaiveDate {
    fn target_type() -> TargetType {
        TargetType::Date
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        match value {
            ArgValue::Date(d) => Ok(*d),
            other => Err(mismatch(other, "NaiveDate")),
        }
    }
}

impl<T: ArgumentType> ArgumentType for Vec<T> {
    fn target_type() -> TargetType {
        TargetType::List
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        match value {
            ArgValue::List(items) => items.iter().map(T::from_value).collect(),
            other => Err(mismatch(other, "Vec")),
        }
    }
}

// Null -> None; cualquier otro valor debe extraerse como T.
impl<T: ArgumentType> ArgumentType for Option<T> {
    fn target_type() -> TargetType {
        match T::target_type() {
            TargetType::Bool | TargetType::Char | TargetType::Int | TargetType::Long | TargetType::Double => TargetType::Any,
            other => other,
        }
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        match value {
            ArgValue::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl ArgumentType for ArgValue {
    fn target_type() -> TargetType {
        TargetType::Any
    }

    fn from_value(value: &ArgValue) -> Result<Self, String> {
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_primitives_and_lists() {
        assert_eq!(i32::from_value(&ArgValue::Int(5)), Ok(5));
        assert!(i32::from_value(&ArgValue::Int(i64::MAX)).is_err());
        assert_eq!(f64::from_value(&ArgValue::Int(2)), Ok(2.0));
        assert_eq!(Vec::<String>::from_value(&ArgValue::list(["a", "b"])), Ok(vec!["a".to_string(), "b".to_string()]));
        assert!(String::from_value(&ArgValue::Int(1)).is_err());
    }

    #[test]
    fn option_maps_null_to_none() {
        assert_eq!(Option::<String>::from_value(&ArgValue::Null), Ok(None));
        assert_eq!(Option::<String>::from_value(&ArgValue::from("x")), Ok(Some("x".into())));
        assert_eq!(Option::<i32>::target_type(), TargetType::Any);
    }
}
