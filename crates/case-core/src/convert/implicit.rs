//! Reglas implícitas indexadas por tipo destino.
use chrono::NaiveDate;

use super::ConversionService;
use crate::model::{ArgValue, TargetType};

pub(super) fn convert(service: &ConversionService, raw: &ArgValue, target: &TargetType) -> Result<ArgValue, String> {
    match (raw, target) {
        // widening
        (ArgValue::Int(v), TargetType::Double) => Ok(ArgValue::Float(*v as f64)),
        (ArgValue::Int(v), TargetType::Int) => Err(format!("{v} is out of range for i32")),
        (ArgValue::Str(s), t) => from_str(service, s, t),
        _ => Err(format!("no implicit conversion from {} to {}", raw.type_label(), target)),
    }
}

fn from_str(service: &ConversionService, text: &str, target: &TargetType) -> Result<ArgValue, String> {
    match target {
        TargetType::Bool => parse_bool(text).map(ArgValue::Bool),
        TargetType::Char => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(ArgValue::Char(c)),
                _ => Err(format!("'{text}' must contain exactly one character")),
            }
        }
        TargetType::Int => {
            let value = decode_integer(text)?;
            i32::try_from(value).map(|v| ArgValue::Int(v.into()))
                                .map_err(|_| format!("'{text}' is out of range for i32"))
        }
        TargetType::Long => decode_integer(text).map(ArgValue::Int),
        TargetType::Double => text.trim()
                                  .parse::<f64>()
                                  .map(ArgValue::Float)
                                  .map_err(|e| format!("'{text}' is not a valid number: {e}")),
        TargetType::Enum(name) => {
            let definition = service.enums().get(name).ok_or_else(|| format!("enum '{name}' is not registered"))?;
            definition.member(text)
                      .map(ArgValue::Enum)
                      .ok_or_else(|| format!("'{text}' is not a member of {name}"))
        }
        TargetType::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d").map(ArgValue::Date)
                                                                     .map_err(|e| format!("'{text}' is not an ISO-8601 date: {e}")),
        TargetType::Object(name) => {
            let factory = service.string_factory(name)
                                 .ok_or_else(|| format!("no string factory registered for {name}"))?;
            factory(text).map(ArgValue::Object)
        }
        TargetType::Str | TargetType::List | TargetType::Any => Err(format!("no implicit conversion from String to {target}")),
    }
}

fn parse_bool(text: &str) -> Result<bool, String> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("'{text}' is not a boolean"))
    }
}

/// Decodifica un entero con signo opcional en decimal, hexadecimal
/// (`0x`, `0X`, `#`) u octal (cero inicial).
pub fn decode_integer(text: &str) -> Result<i64, String> {
    let invalid = || format!("'{text}' is not a valid integer");
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        Some(_) => (false, text),
        None => return Err("empty string is not a valid integer".into()),
    };
    let (radix, digits) = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (16, hex)
    } else if let Some(hex) = rest.strip_prefix('#') {
        (16, hex)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };
    if digits.is_empty() || digits.starts_with(['-', '+']) {
        return Err(invalid());
    }
    let magnitude = i128::from_str_radix(digits, radix).map_err(|_| invalid())?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| format!("'{text}' is out of range for i64"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_radixes() {
        assert_eq!(decode_integer("42"), Ok(42));
        assert_eq!(decode_integer("-42"), Ok(-42));
        assert_eq!(decode_integer("0xF1"), Ok(241));
        assert_eq!(decode_integer("#ff"), Ok(255));
        assert_eq!(decode_integer("010"), Ok(8));
        assert_eq!(decode_integer("0"), Ok(0));
        assert!(decode_integer("").is_err());
        assert!(decode_integer("0x").is_err());
        assert!(decode_integer("--1").is_err());
        assert!(decode_integer("12a").is_err());
        assert!(decode_integer("99999999999999999999").is_err());
    }

    #[test]
    fn string_rules() {
        let service = ConversionService::default();
        assert_eq!(from_str(&service, "TRUE", &TargetType::Bool), Ok(ArgValue::Bool(true)));
        assert!(from_str(&service, "yes", &TargetType::Bool).is_err());
        assert_eq!(from_str(&service, "x", &TargetType::Char), Ok(ArgValue::Char('x')));
        assert!(from_str(&service, "xy", &TargetType::Char).is_err());
        assert!(from_str(&service, "4294967296", &TargetType::Int).is_err());
        assert_eq!(from_str(&service, "4294967296", &TargetType::Long), Ok(ArgValue::Int(4_294_967_296)));
        assert_eq!(from_str(&service, "2.5", &TargetType::Double), Ok(ArgValue::Float(2.5)));
        let date = NaiveDate::from_ymd_opt(1990, 10, 22).expect("valid date");
        assert_eq!(from_str(&service, "1990-10-22", &TargetType::Date), Ok(ArgValue::Date(date)));
        assert!(from_str(&service, "22/10/1990", &TargetType::Date).is_err());
    }

    #[test]
    fn widening_from_int() {
        let service = ConversionService::default();
        assert_eq!(convert(&service, &ArgValue::Int(3), &TargetType::Double), Ok(ArgValue::Float(3.0)));
        assert!(convert(&service, &ArgValue::Bool(true), &TargetType::Int).is_err());
    }
}
