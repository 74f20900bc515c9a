use case_core::source::ResolveContext;
use case_core::{ArgValue, CaseEngine, SourceDescriptor, SourceError};
use case_domain::{Rank, TemporalUnit};

fn engine() -> CaseEngine {
    CaseEngine::builder().enum_type::<Rank>().enum_type::<TemporalUnit>().build()
}

fn member_names(descriptor: &SourceDescriptor) -> Vec<String> {
    engine().resolve(descriptor, &ResolveContext::new("enums"))
            .expect("valid")
            .map(|row| match row.expect("row").values() {
                [ArgValue::Enum(member)] => member.name.to_string(),
                other => panic!("unexpected row {other:?}"),
            })
            .collect()
}

#[test]
fn excluding_private_leaves_four_ranks_in_order() {
    assert_eq!(member_names(&SourceDescriptor::enum_excluding("Rank", ["PRIVATE"])),
               vec!["LANCE_CORPORAL", "CORPORAL", "SERGEANT", "STAFF_SERGEANT"]);
}

#[test]
fn including_keeps_declaration_order() {
    assert_eq!(member_names(&SourceDescriptor::enum_including("Rank", ["SERGEANT", "PRIVATE"])), vec!["PRIVATE", "SERGEANT"]);
    assert_eq!(member_names(&SourceDescriptor::enum_values("TemporalUnit")).len(), 16);
}

#[test]
fn unknown_names_are_rejected_before_resolution() {
    let engine = engine();
    let context = ResolveContext::new("enums");
    assert!(matches!(engine.resolve(&SourceDescriptor::enum_excluding("Rank", ["GENERAL"]), &context),
                     Err(SourceError::UnknownEnumMember { .. })));
    assert!(matches!(engine.resolve(&SourceDescriptor::enum_values("Colour"), &context), Err(SourceError::UnknownEnum(_))));
}
