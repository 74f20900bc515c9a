//! Plantillas de nombre por caso.
//!
//! Placeholders: `{index}`, `{N}` (argumento N, base 0), `{arguments}`,
//! `{displayName}`, `{currentRepetition}`, `{totalRepetitions}`.
//! Una comilla simple abre una sección literal (las llaves dentro son
//! texto); `''` es una comilla literal dentro y fuera de esas secciones.
//! La plantilla se parsea una vez y se renderiza por caso.
use crate::constants::{ARGUMENTS_SEPARATOR, QUOTE};
use crate::errors::RenderError;
use crate::model::{ArgValue, RepetitionInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Index,
    Argument(usize),
    Arguments,
    DisplayName,
    CurrentRepetition,
    TotalRepetitions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Literal,
    Quoted { opened_at: usize },
    Placeholder { opened_at: usize },
}

/// Plantilla parseada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    source: String,
    segments: Vec<Segment>,
}

/// Datos disponibles para renderizar un nombre.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    pub display_name: &'a str,
    pub index: Option<usize>,
    pub arguments: Option<&'a [ArgValue]>,
    pub repetition: Option<RepetitionInfo>,
}

impl<'a> RenderContext<'a> {
    /// Contexto de un caso parametrizado.
    pub fn for_case(display_name: &'a str, index: usize, arguments: &'a [ArgValue]) -> Self {
        Self { display_name, index: Some(index), arguments: Some(arguments), repetition: None }
    }

    /// Contexto de una repetición.
    pub fn for_repetition(display_name: &'a str, repetition: RepetitionInfo) -> Self {
        Self { display_name, index: Some(repetition.current), arguments: None, repetition: Some(repetition) }
    }
}

impl NameTemplate {
    pub fn parse(template: &str) -> Result<Self, RenderError> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut state = State::Literal;
        let mut chars = template.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            state = match state {
                State::Literal | State::Quoted { .. } if c == QUOTE => {
                    if chars.peek().map(|(_, next)| *next) == Some(QUOTE) {
                        chars.next();
                        text.push(QUOTE);
                        state
                    } else if let State::Quoted { .. } = state {
                        State::Literal
                    } else {
                        State::Quoted { opened_at: offset }
                    }
                }
                State::Literal if c == '{' => {
                    if !text.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut text)));
                    }
                    State::Placeholder { opened_at: offset }
                }
                State::Literal | State::Quoted { .. } => {
                    text.push(c);
                    state
                }
                State::Placeholder { .. } if c == '}' => {
                    segments.push(placeholder(template, &std::mem::take(&mut text))?);
                    State::Literal
                }
                State::Placeholder { .. } => {
                    text.push(c);
                    state
                }
            };
        }

        match state {
            State::Quoted { opened_at } => Err(RenderError::UnterminatedQuote { template: template.to_string(), offset: opened_at }),
            State::Placeholder { opened_at } => {
                Err(RenderError::UnterminatedPlaceholder { template: template.to_string(), offset: opened_at })
            }
            State::Literal => {
                if !text.is_empty() {
                    segments.push(Segment::Literal(text));
                }
                Ok(Self { source: template.to_string(), segments })
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// `true` si la plantilla solo tiene sentido para casos repetidos.
    pub fn uses_repetition(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::CurrentRepetition | Segment::TotalRepetitions))
    }

    pub fn render(&self, context: &RenderContext<'_>) -> Result<String, RenderError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::DisplayName => out.push_str(context.display_name),
                Segment::Index => out.push_str(&self.require(context.index, "index")?.to_string()),
                Segment::Argument(position) => {
                    let arguments = self.require(context.arguments, &position.to_string())?;
                    let value = arguments.get(*position).ok_or_else(|| RenderError::ArgumentOutOfRange { template: self.source.clone(),
                                                                                                       index: *position,
                                                                                                       len: arguments.len() })?;
                    out.push_str(&self.non_null(value, &position.to_string())?);
                }
                Segment::Arguments => {
                    let arguments = self.require(context.arguments, "arguments")?;
                    let parts = arguments.iter().map(|v| self.non_null(v, "arguments")).collect::<Result<Vec<_>, _>>()?;
                    out.push_str(&parts.join(ARGUMENTS_SEPARATOR));
                }
                Segment::CurrentRepetition => {
                    out.push_str(&self.require(context.repetition, "currentRepetition")?.current.to_string())
                }
                Segment::TotalRepetitions => out.push_str(&self.require(context.repetition, "totalRepetitions")?.total.to_string()),
            }
        }
        Ok(out)
    }

    fn require<T>(&self, value: Option<T>, name: &str) -> Result<T, RenderError> {
        value.ok_or_else(|| RenderError::MissingContext { template: self.source.clone(), name: name.to_string() })
    }

    fn non_null(&self, value: &ArgValue, placeholder: &str) -> Result<String, RenderError> {
        if value.is_null() {
            return Err(RenderError::NullArgument { template: self.source.clone(), placeholder: placeholder.to_string() });
        }
        Ok(value.to_string())
    }
}

fn placeholder(template: &str, name: &str) -> Result<Segment, RenderError> {
    let segment = match name.trim() {
        "index" => Segment::Index,
        "arguments" => Segment::Arguments,
        "displayName" => Segment::DisplayName,
        "currentRepetition" => Segment::CurrentRepetition,
        "totalRepetitions" => Segment::TotalRepetitions,
        other => match other.parse::<usize>() {
            Ok(position) => Segment::Argument(position),
            Err(_) => return Err(RenderError::UnknownPlaceholder { template: template.to_string(), name: name.to_string() }),
        },
    };
    Ok(segment)
}
