//! Parser CSV mínimo para fuentes inline y de recursos.
//!
//! Reglas:
//! - espacios alrededor de cada campo sin comillas se recortan;
//! - `'...'` protege delimitadores; `''` dentro de comillas es una comilla;
//! - campo vacío sin comillas => `null`; campo `''` => `empty_value`;
//! - campos iguales a un token de `null_values` => `null`;
//! - líneas en blanco se ignoran.
use log::trace;

use super::descriptor::CsvFormat;
use crate::constants::QUOTE;
use crate::errors::SourceError;
use crate::model::{ArgValue, Arguments};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Antes del primer carácter significativo del campo.
    Start,
    Unquoted,
    Quoted,
    /// Tras la comilla de cierre; solo se admiten espacios o el delimitador.
    AfterQuote,
}

struct Field {
    text: String,
    quoted: bool,
}

impl Field {
    fn new() -> Self {
        Self { text: String::new(), quoted: false }
    }

    fn finish(self, format: &CsvFormat) -> ArgValue {
        let text = if self.quoted {
            if self.text.is_empty() {
                format.empty_value.clone()
            } else {
                self.text
            }
        } else {
            let trimmed = self.text.trim_end();
            if trimmed.is_empty() {
                return ArgValue::Null;
            }
            trimmed.to_string()
        };
        if format.null_values.iter().any(|token| *token == text) {
            ArgValue::Null
        } else {
            ArgValue::Str(text)
        }
    }
}

/// Parsea una línea. `Ok(None)` para líneas en blanco.
pub fn parse_line(line: &str, format: &CsvFormat, origin: &str, line_number: usize) -> Result<Option<Arguments>, SourceError> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let malformed = |reason: String| SourceError::MalformedCsv { origin: origin.to_string(), line: line_number, reason };
    let delimiter = format.delimiter;
    let mut values = Vec::new();
    let mut field = Field::new();
    let mut state = State::Start;
    let mut chars = line.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        state = match state {
            State::Start if c.is_whitespace() && c != delimiter => State::Start,
            State::Start if c == QUOTE => {
                field.quoted = true;
                State::Quoted
            }
            State::Start | State::Unquoted if c == delimiter => {
                values.push(std::mem::replace(&mut field, Field::new()).finish(format));
                State::Start
            }
            State::Start | State::Unquoted => {
                field.text.push(c);
                State::Unquoted
            }
            State::Quoted if c == QUOTE => {
                if chars.peek().map(|(_, next)| *next) == Some(QUOTE) {
                    chars.next();
                    field.text.push(QUOTE);
                    State::Quoted
                } else {
                    State::AfterQuote
                }
            }
            State::Quoted => {
                field.text.push(c);
                State::Quoted
            }
            State::AfterQuote if c == delimiter => {
                values.push(std::mem::replace(&mut field, Field::new()).finish(format));
                State::Start
            }
            State::AfterQuote if c.is_whitespace() => State::AfterQuote,
            State::AfterQuote => return Err(malformed(format!("unexpected {c:?} after closing quote at column {}", offset + 1))),
        };
    }

    if state == State::Quoted {
        return Err(malformed("unterminated quoted field".into()));
    }
    values.push(field.finish(format));
    trace!("{origin}:{line_number} -> {} field(s)", values.len());
    Ok(Some(values))
}

/// Filas de un texto CSV, parseadas bajo demanda línea a línea.
pub struct CsvRows<I> {
    lines: I,
    format: CsvFormat,
    origin: String,
    failed: bool,
}

impl<I> CsvRows<I> where I: Iterator<Item = (usize, String)>
{
    /// `lines` produce `(número de línea base 1, contenido)`.
    pub fn new(lines: I, format: CsvFormat, origin: impl Into<String>) -> Self {
        Self { lines, format, origin: origin.into(), failed: false }
    }
}

impl<I> Iterator for CsvRows<I> where I: Iterator<Item = (usize, String)>
{
    type Item = Result<Arguments, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for (number, line) in self.lines.by_ref() {
            match parse_line(&line, &self.format, &self.origin, number) {
                Ok(Some(values)) => return Some(Ok(values)),
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str, format: &CsvFormat) -> Arguments {
        parse_line(line, format, "test", 1).expect("well formed").expect("not blank")
    }

    #[test]
    fn trims_unquoted_fields_and_keeps_quoted_delimiters() {
        let format = CsvFormat::default();
        assert_eq!(parse("apple, 1", &format), vec![ArgValue::from("apple"), ArgValue::from("1")]);
        assert_eq!(parse("'lemon, lime', 3", &format), vec![ArgValue::from("lemon, lime"), ArgValue::from("3")]);
        assert_eq!(parse("' padded ' , x", &format), vec![ArgValue::from(" padded "), ArgValue::from("x")]);
        assert_eq!(parse("'it''s', ok", &format), vec![ArgValue::from("it's"), ArgValue::from("ok")]);
    }

    #[test]
    fn empty_and_null_tokens() {
        let format = CsvFormat::default().null_values(["NIL", "N/A"]).empty_value("EMPTY");
        assert_eq!(parse("apple, , NIL, '', N/A", &format),
                   vec![ArgValue::from("apple"), ArgValue::Null, ArgValue::Null, ArgValue::from("EMPTY"), ArgValue::Null]);
        assert_eq!(parse("a,", &format), vec![ArgValue::from("a"), ArgValue::Null]);
    }

    #[test]
    fn custom_delimiter() {
        let format = CsvFormat::default().delimiter('|');
        assert_eq!(parse("apple | 1, 2", &format), vec![ArgValue::from("apple"), ArgValue::from("1, 2")]);
    }

    #[test]
    fn malformed_lines_are_reported_with_position() {
        let format = CsvFormat::default();
        assert!(matches!(parse_line("'open, 1", &format, "inline", 4), Err(SourceError::MalformedCsv { line: 4, .. })));
        assert!(matches!(parse_line("'a'b, 1", &format, "inline", 2), Err(SourceError::MalformedCsv { line: 2, .. })));
        assert_eq!(parse_line("   ", &format, "inline", 1), Ok(None));
    }

    #[test]
    fn rows_skip_blank_lines_and_stop_after_an_error() {
        let lines = vec!["a, 1", "", "'b, 2", "c, 3"].into_iter().enumerate().map(|(i, l)| (i + 1, l.to_string()));
        let mut rows = CsvRows::new(lines, CsvFormat::default(), "inline");
        assert_eq!(rows.next(), Some(Ok(vec![ArgValue::from("a"), ArgValue::from("1")])));
        assert!(matches!(rows.next(), Some(Err(SourceError::MalformedCsv { line: 3, .. }))));
        assert_eq!(rows.next(), None);
    }
}
