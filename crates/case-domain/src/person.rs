use std::fmt;

use chrono::{Datelike, NaiveDate};
use case_core::{AggregationError, ArgValue, ArgumentsAccessor, ArgumentsAggregator, Opaque, SlotContext, TargetType};

use crate::{DomainError, Gender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
    gender: Gender,
    date_of_birth: NaiveDate,
}

impl Person {
    /// Nombre con el que se registra el tipo en `TargetType::Object`.
    pub const TYPE_NAME: &'static str = "Person";

    pub fn new(first_name: &str, last_name: &str, gender: Gender, date_of_birth: NaiveDate) -> Result<Self, DomainError> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(DomainError::ValidationError("a person needs a first and a last name".to_string()));
        }
        Ok(Person { first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    gender,
                    date_of_birth })
    }

    /// Construye una persona desde una fila `nombre, apellido, género, fecha`.
    pub fn from_accessor(arguments: &ArgumentsAccessor) -> Result<Self, AggregationError> {
        let first_name = arguments.get_string(0)?.unwrap_or_default();
        let last_name = arguments.get_string(1)?.unwrap_or_default();
        let gender: Gender = arguments.get_typed(2)?;
        let date_of_birth: NaiveDate = arguments.get_typed(3)?;
        Person::new(&first_name, &last_name, gender, date_of_birth)
            .map_err(|e| AggregationError::failed(arguments.row_index(), 0, e.to_string()))
    }

    pub fn target_type() -> TargetType {
        TargetType::Object(Self::TYPE_NAME.to_string())
    }

    pub fn first_name(&self) -> &str { &self.first_name }
    pub fn last_name(&self) -> &str { &self.last_name }
    pub fn gender(&self) -> Gender { self.gender }
    pub fn date_of_birth(&self) -> NaiveDate { self.date_of_birth }
    pub fn birth_year(&self) -> i32 { self.date_of_birth.year() }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Agrega una fila CSV completa en un `Person`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonAggregator;

impl ArgumentsAggregator for PersonAggregator {
    fn aggregate(&self, accessor: &ArgumentsAccessor, slot: &SlotContext<'_>) -> Result<ArgValue, AggregationError> {
        let person = Person::from_accessor(accessor).map_err(|e| match e {
                                                        AggregationError::Aggregator { row_index, reason, .. } => {
                                                            AggregationError::failed(row_index, slot.position, reason)
                                                        }
                                                        other => other,
                                                    })?;
        Ok(ArgValue::Object(Opaque::new(Person::TYPE_NAME, person)))
    }
}
