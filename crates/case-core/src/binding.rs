//! Ligado de filas a parámetros.
//!
//! Los parámetros posicionales toman los valores de la fila en orden; los
//! parámetros de agregación o accessor van después de todos los posicionales
//! y cada uno consume la fila completa. Los valores sobrantes se ignoran para
//! el ligado pero siguen visibles a través de los accessors.
use std::sync::Arc;

use log::{debug, trace};

use crate::aggregate::{ArgumentsAccessor, SlotContext};
use crate::convert::{is_assignable, ConversionService};
use crate::errors::{AggregationError, CaseError, SourceError};
use crate::model::{ArgValue, ArgumentRow, BoundArguments, Opaque, ParameterSlot, SlotKind, ACCESSOR_TYPE_NAME};

/// Comprueba que ningún parámetro posicional siga a uno que consume la fila.
pub fn validate_slots(slots: &[ParameterSlot]) -> Result<(), SourceError> {
    if let Some(first) = slots.iter().position(ParameterSlot::consumes_row) {
        if let Some(offset) = slots[first..].iter().position(|s| !s.consumes_row()) {
            return Err(SourceError::InvalidSlots(format!("positional parameter at position {} follows a row-consuming parameter at position {first}",
                                                         first + offset)));
        }
    }
    Ok(())
}

fn positional_count(slots: &[ParameterSlot]) -> usize {
    slots.iter().filter(|s| !s.consumes_row()).count()
}

/// Liga `row` contra `slots`: un valor por parámetro.
pub fn bind(row: &ArgumentRow, slots: &[ParameterSlot], conversions: &Arc<ConversionService>) -> Result<BoundArguments, CaseError> {
    validate_slots(slots)?;
    let positional = positional_count(slots);
    if row.len() < positional {
        return Err(SourceError::ArityMismatch { row_index: row.index(), slots: positional, values: row.len() }.into());
    }
    debug!("binding row {} ({} value(s)) to {} parameter(s)", row.index(), row.len(), slots.len());

    let mut accessor: Option<ArgumentsAccessor> = None;
    let mut values = Vec::with_capacity(slots.len());
    for (position, slot) in slots.iter().enumerate() {
        let value = match slot.kind() {
            SlotKind::Positional { converter } => {
                let raw = row.get(position).unwrap_or(&ArgValue::Null);
                conversions.convert_with(raw, slot.target(), converter.as_deref())
                           .map_err(|e| e.at(row.index(), position))?
            }
            SlotKind::Aggregate(aggregator) => {
                let accessor = accessor.get_or_insert_with(|| ArgumentsAccessor::new(row.clone(), conversions.clone()));
                let context = SlotContext { position, target: slot.target() };
                let value = aggregator.aggregate(accessor, &context).map_err(|e| e.at_slot(position))?;
                if !is_assignable(&value, slot.target()) {
                    return Err(AggregationError::failed(row.index(),
                                                        position,
                                                        format!("aggregator produced {} but the parameter expects {}",
                                                                value.type_label(),
                                                                slot.target()))
                               .into());
                }
                value
            }
            SlotKind::Accessor => {
                let accessor = accessor.get_or_insert_with(|| ArgumentsAccessor::new(row.clone(), conversions.clone()));
                ArgValue::Object(Opaque::new(ACCESSOR_TYPE_NAME, accessor.clone()))
            }
        };
        trace!("row {} slot {position}: {}", row.index(), value.describe());
        values.push(value);
    }
    Ok(BoundArguments::new(row.index(), values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TargetType;

    fn conversions() -> Arc<ConversionService> {
        Arc::new(ConversionService::default())
    }

    fn full_name() -> Arc<dyn crate::aggregate::ArgumentsAggregator> {
        Arc::new(|a: &ArgumentsAccessor, _: &SlotContext<'_>| -> Result<ArgValue, AggregationError> {
            let first = a.get_string(0)?.unwrap_or_default();
            let last = a.get_string(1)?.unwrap_or_default();
            Ok(ArgValue::from(format!("{first} {last}")))
        })
    }

    #[test]
    fn positional_values_are_converted_per_slot() {
        let row = ArgumentRow::new(1, vec![ArgValue::from("apple"), ArgValue::from("1"), ArgValue::from("extra")]);
        let slots = [ParameterSlot::of(TargetType::Str), ParameterSlot::of(TargetType::Int)];
        let bound = bind(&row, &slots, &conversions()).expect("binds");
        assert_eq!(bound.values(), &[ArgValue::from("apple"), ArgValue::Int(1)]);
        assert_eq!(bound.index(), 1);
    }

    #[test]
    fn conversion_failures_are_attributed() {
        let row = ArgumentRow::new(7, vec![ArgValue::from("x")]);
        match bind(&row, &[ParameterSlot::of(TargetType::Int)], &conversions()) {
            Err(CaseError::Conversion(e)) => assert_eq!((e.row_index, e.slot), (Some(7), Some(0))),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn too_few_values_is_an_arity_mismatch() {
        let row = ArgumentRow::new(3, vec![ArgValue::from("a")]);
        let slots = [ParameterSlot::of(TargetType::Str), ParameterSlot::of(TargetType::Str)];
        assert_eq!(bind(&row, &slots, &conversions()),
                   Err(CaseError::Source(SourceError::ArityMismatch { row_index: 3, slots: 2, values: 1 })));
    }

    #[test]
    fn aggregators_and_accessors_consume_the_row() {
        let row = ArgumentRow::new(1, vec![ArgValue::from("Jane"), ArgValue::from("Doe")]);
        let slots = [ParameterSlot::of(TargetType::Str),
                     ParameterSlot::aggregated(TargetType::Str, full_name()),
                     ParameterSlot::accessor()];
        let bound = bind(&row, &slots, &conversions()).expect("binds");
        assert_eq!(bound.get(1), Some(&ArgValue::from("Jane Doe")));
        let accessor = bound.accessor(2).expect("accessor bound");
        assert_eq!(accessor.len(), 2);
    }

    #[test]
    fn aggregation_failures_name_the_slot() {
        let row = ArgumentRow::new(3, vec![ArgValue::from("a")]);
        let out_of_range: Arc<dyn crate::aggregate::ArgumentsAggregator> =
            Arc::new(|a: &ArgumentsAccessor, _: &SlotContext<'_>| -> Result<ArgValue, AggregationError> { a.get(5).cloned() });
        let slots = [ParameterSlot::of(TargetType::Str), ParameterSlot::aggregated(TargetType::Any, out_of_range)];
        match bind(&row, &slots, &conversions()) {
            Err(CaseError::Aggregation(e)) => {
                assert_eq!(e, AggregationError::IndexOutOfBounds { row_index: 3, slot: Some(1), index: 5, len: 1 });
                assert_eq!(e.to_string(), "row 3, slot 1: index 5 is out of bounds for 1 argument(s)");
            }
            other => panic!("unexpected {other:?}"),
        }

        let slots = [ParameterSlot::aggregated(TargetType::Any, full_name()),
                     ParameterSlot::aggregated(TargetType::Int,
                                               Arc::new(|a: &ArgumentsAccessor, _: &SlotContext<'_>| a.get_as(0, &TargetType::Int)))];
        let row = ArgumentRow::new(4, vec![ArgValue::from("Jane"), ArgValue::from("Doe")]);
        match bind(&row, &slots, &conversions()) {
            Err(CaseError::Aggregation(e)) => {
                assert!(matches!(e, AggregationError::Conversion { row_index: 4, .. }));
                assert_eq!(e.slot(), Some(1));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn aggregate_result_must_match_the_target() {
        let row = ArgumentRow::new(1, vec![ArgValue::from("Jane"), ArgValue::from("Doe")]);
        let slots = [ParameterSlot::aggregated(TargetType::Int, full_name())];
        assert!(matches!(bind(&row, &slots, &conversions()),
                         Err(CaseError::Aggregation(AggregationError::Aggregator { row_index: 1, slot: 0, .. }))));
    }

    #[test]
    fn positional_after_aggregate_is_rejected() {
        let slots = [ParameterSlot::accessor(), ParameterSlot::of(TargetType::Str)];
        assert!(matches!(validate_slots(&slots), Err(SourceError::InvalidSlots(_))));
    }
}
